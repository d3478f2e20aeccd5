/*
 * @Author       : 老董
 * @Date         : 2026-02-11
 * @Description  : AnnHandle 扁平接口测试
 */

use crate::assert_err;
use crate::errors::{AnnError, ErrorKind};
use crate::nn::{AnnHandle, OutputRange, STATUS_FAILURE, STATUS_OK, WeightRange, status};
use std::fs;

#[test]
fn test_handle_construct_and_activate() {
    let handle = AnnHandle::new(&[1, 0, 1], &[0], &[1], &[1.0]).unwrap();
    assert_eq!(status(&handle.set_input(&[0.0])), STATUS_OK);
    handle.activate();

    let mut outputs = [0.0; 1];
    assert_eq!(status(&handle.get_output(&mut outputs)), STATUS_OK);
    assert_eq!(outputs, [0.5]);
}

#[test]
fn test_handle_construct_errors_are_recoverable() {
    assert_err!(
        AnnHandle::new(&[2], &[], &[], &[]),
        AnnError::InvalidNeuronCounts { len: 1 }
    );
    assert_err!(
        AnnHandle::new(&[2, -1, 1], &[], &[], &[]),
        AnnError::NegativeNeuronCount { value: -1 }
    );
    assert_err!(
        AnnHandle::new(&[2, 1], &[0, 1], &[2], &[0.5]),
        AnnError::EdgeLengthMismatch { .. }
    );
    assert_err!(
        AnnHandle::new(&[2, 1], &[0, -3], &[2, 2], &[0.5, 0.5]),
        AnnError::NeuronIndexOutOfRange {
            connection: 1,
            index: -3,
            total: 3
        }
    );
    assert_err!(
        AnnHandle::new(&[2, 1], &[0], &[3], &[0.5]),
        kind = ErrorKind::Config
    );
}

#[test]
fn test_handle_status_codes() {
    let handle = AnnHandle::new(&[2, 2, 1], &[], &[], &[]).unwrap();
    handle.fully_connect_feedforward();
    assert_eq!(handle.inner().total_connections(), 6);

    assert_eq!(status(&handle.randomize_weights(-1.0, 1.0)), STATUS_OK);
    assert_eq!(status(&handle.randomize_weights(1.0, -1.0)), STATUS_FAILURE);
    assert_eq!(status(&handle.randomize_weights_in(WeightRange::default())), STATUS_OK);
    assert_eq!(status(&handle.set_input(&[1.0])), STATUS_FAILURE);

    let mut wrong = [0.0; 2];
    assert_eq!(status(&handle.get_output(&mut wrong)), STATUS_FAILURE);
    assert_eq!(status(&handle.deserialize("nonexistent_handle_file.txt")), STATUS_FAILURE);
}

#[test]
fn test_handle_clone_shares_network() {
    let handle = AnnHandle::new(&[1, 1], &[0], &[1], &[1.0]).unwrap();
    let other = handle.clone();
    *other.inner_mut().weight_mut(0).unwrap() = 100.0;

    handle.set_input(&[1.0]).unwrap();
    handle.activate();
    let mut outputs = [0.0];
    other.get_output(&mut outputs).unwrap();
    assert_eq!(outputs, [1.0]);
}

#[test]
fn test_handle_file_round_trip() {
    let temp_file = "test_ann_handle_file_round_trip.txt";

    let handle = AnnHandle::new(&[2, 3, 2], &[], &[], &[]).unwrap();
    handle.fully_connect_feedforward();
    handle.randomize_weights(-0.5, 0.5).unwrap();
    assert_eq!(status(&handle.serialize(temp_file)), STATUS_OK);

    let restored = AnnHandle::from_file(temp_file).unwrap();
    assert_eq!(restored.inner().weights(), handle.inner().weights());

    let blank = AnnHandle::new(&[1, 1], &[], &[], &[]).unwrap();
    assert_eq!(status(&blank.deserialize(temp_file)), STATUS_OK);
    assert_eq!(blank.inner().num_hidden(), 3);

    let mut buffer = Vec::new();
    blank.describe_to(&mut buffer).unwrap();
    assert!(String::from_utf8(buffer).unwrap().starts_with("神经元总数  : 7\n"));

    fs::remove_file(temp_file).ok();
}

#[test]
fn test_handle_get_output_scaled() {
    let handle = AnnHandle::new(&[1, 2], &[0], &[1], &[100.0]).unwrap();
    handle.set_input(&[1.0]).unwrap();
    handle.activate();

    let mut buffer = [0.0; 2];
    handle.get_output_scaled(&mut buffer, OutputRange::new(0.0, 10.0)).unwrap();
    assert_eq!(buffer, [10.0, 5.0]);

    let mut short = [0.0; 1];
    assert_err!(
        handle.get_output_scaled(&mut short, OutputRange::default()),
        AnnError::OutputLengthMismatch { expected: 2, got: 1 }
    );
    assert_err!(
        handle.get_output_scaled(&mut buffer, OutputRange::new(1.0, 0.0)),
        kind = ErrorKind::Config
    );
}
