/*
 * @Author       : 老董
 * @Date         : 2026-02-08
 * @Description  : Ann 显式构建与基础访问器测试
 */

use crate::assert_err;
use crate::errors::{AnnError, ErrorKind};
use crate::nn::{Ann, NeuronCounts, NeuronType};

#[test]
fn test_new_with_two_counts_has_no_hidden() {
    let ann = Ann::new(&[3, 2], &[], &[], &[]).unwrap();
    assert_eq!(ann.num_input(), 3);
    assert_eq!(ann.num_hidden(), 0);
    assert_eq!(ann.num_output(), 2);
    assert_eq!(ann.num_input_plus_hidden(), 3);
    assert_eq!(ann.total_neurons(), 5);
    assert_eq!(ann.total_connections(), 0);
}

#[test]
fn test_new_with_three_counts() {
    // 任意合法数量、空连接：神经元总数为各数量之和，连接数为0
    for counts in [[1usize, 0, 1], [2, 3, 1], [0, 4, 0], [5, 1, 7]] {
        let ann = Ann::new(&counts, &[], &[], &[]).unwrap();
        assert_eq!(ann.total_neurons(), counts.iter().sum::<usize>());
        assert_eq!(ann.total_connections(), 0);
        assert_eq!(
            ann.counts(),
            NeuronCounts::new(counts[0], counts[1], counts[2])
        );
    }
}

#[test]
fn test_neuron_layout_follows_index_order() {
    let ann = Ann::new(&[2, 2, 1], &[], &[], &[]).unwrap();
    let types: Vec<_> = ann.neurons().iter().map(|n| n.neuron_type).collect();
    assert_eq!(
        types,
        vec![
            NeuronType::Input,
            NeuronType::Input,
            NeuronType::Hidden,
            NeuronType::Hidden,
            NeuronType::Output,
        ]
    );
    // 新建神经元状态为零
    assert!(
        ann.neurons()
            .iter()
            .all(|n| n.input_sum == 0.0 && n.output == 0.0)
    );
}

#[test]
fn test_connections_keep_given_order() {
    let ann = Ann::new(&[2, 1, 1], &[2, 0, 1], &[3, 2, 2], &[0.25, 0.5, -0.5]).unwrap();
    let edges: Vec<_> = ann
        .connections()
        .iter()
        .map(|c| (c.source, c.target, c.weight))
        .collect();
    assert_eq!(edges, vec![(2, 3, 0.25), (0, 2, 0.5), (1, 2, -0.5)]);
    assert!(ann.connections().iter().all(|c| c.data == 0.0));
    assert_eq!(ann.weights(), vec![0.25, 0.5, -0.5]);
}

#[test]
fn test_invalid_counts_length() {
    assert_err!(
        Ann::new(&[1], &[], &[], &[]),
        AnnError::InvalidNeuronCounts { len: 1 }
    );
    assert_err!(
        Ann::new(&[1, 2, 3, 4], &[], &[], &[]),
        AnnError::InvalidNeuronCounts { len: 4 }
    );
    assert_err!(Ann::new(&[], &[], &[], &[]), kind = ErrorKind::Config);
}

#[test]
fn test_neuron_count_overflow() {
    assert_err!(
        Ann::new(&[usize::MAX, 1], &[], &[], &[]),
        AnnError::NeuronCountOverflow {
            input: usize::MAX,
            hidden: 0,
            output: 1
        }
    );
    assert_err!(
        Ann::new(&[1, usize::MAX, 1], &[], &[], &[]),
        kind = ErrorKind::Config
    );
    assert_err!(
        Ann::with_topology(NeuronCounts::new(usize::MAX, 1, 0), &[], &[], &[]),
        AnnError::NeuronCountOverflow { .. }
    );

    let counts = NeuronCounts::new(usize::MAX, 0, 1);
    assert_eq!(counts.checked_input_plus_hidden(), Some(usize::MAX));
    assert_eq!(counts.checked_total(), None);
    assert_eq!(NeuronCounts::new(2, 3, 1).checked_total(), Some(6));
}

#[test]
fn test_mismatched_edge_lengths() {
    assert_err!(
        Ann::new(&[2, 1], &[0, 1], &[2], &[0.5, 0.5]),
        AnnError::EdgeLengthMismatch {
            sources: 2,
            targets: 1,
            weights: 2
        }
    );
    assert_err!(
        Ann::new(&[2, 1], &[0], &[2], &[]),
        AnnError::EdgeLengthMismatch { .. }
    );
    assert_err!(
        Ann::new(&[2, 1], &[0], &[2], &[1.0, 2.0]),
        kind = ErrorKind::Config
    );
}

#[test]
fn test_neuron_index_out_of_range() {
    // 上界为开区间：index == total 同样越界
    assert_err!(
        Ann::new(&[2, 1], &[0, 3], &[2, 2], &[0.5, 0.5]),
        AnnError::NeuronIndexOutOfRange {
            connection: 1,
            index: 3,
            total: 3
        }
    );
    assert_err!(
        Ann::new(&[2, 1], &[0], &[100], &[0.5]),
        AnnError::NeuronIndexOutOfRange { index: 100, .. }
    );
    // 边界内的最大索引合法
    assert!(Ann::new(&[2, 1], &[0], &[2], &[0.5]).is_ok());
}

#[test]
fn test_error_messages() {
    let err = Ann::new(&[1], &[], &[], &[]).unwrap_err();
    assert_eq!(err.to_string(), "神经元数量向量须含2或3个元素，实际为1个");

    let err = Ann::new(&[2, 1], &[5], &[2], &[0.5]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "第0条连接的神经元索引5越界，有效范围为[0, 3)"
    );
}

#[test]
fn test_weight_mut() {
    let mut ann = Ann::new(&[1, 1], &[0], &[1], &[0.5]).unwrap();
    *ann.weight_mut(0).unwrap() = -2.0;
    assert_eq!(ann.connections()[0].weight, -2.0);
    assert!(ann.weight_mut(1).is_none());
}

#[test]
fn test_reset_state() {
    let mut ann = Ann::new(&[1, 1], &[0], &[1], &[1.0]).unwrap();
    ann.set_input(&[2.0]).unwrap();
    ann.activate();
    assert!(ann.get_output()[0] > 0.5);

    ann.reset_state();
    assert!(
        ann.neurons()
            .iter()
            .all(|n| n.input_sum == 0.0 && n.output == 0.0)
    );
    assert_eq!(ann.connections()[0].data, 0.0);
    // 拓扑与权重不受影响
    assert_eq!(ann.weights(), vec![1.0]);
}

#[test]
fn test_neuron_counts_helpers() {
    let counts = NeuronCounts::from_slice(&[2, 3, 1]).unwrap();
    assert_eq!(counts.input_range(), 0..2);
    assert_eq!(counts.hidden_range(), 2..5);
    assert_eq!(counts.output_range(), 5..6);
    assert_eq!(counts.type_of(1), NeuronType::Input);
    assert_eq!(counts.type_of(4), NeuronType::Hidden);
    assert_eq!(counts.type_of(5), NeuronType::Output);
}

#[test]
fn test_neuron_type_codes() {
    assert_eq!(NeuronType::Input.code(), 0);
    assert_eq!(NeuronType::Output.code(), 1);
    assert_eq!(NeuronType::Hidden.code(), 2);
    for t in [NeuronType::Input, NeuronType::Output, NeuronType::Hidden] {
        assert_eq!(NeuronType::from_code(t.code().into()), Some(t));
    }
    assert_eq!(NeuronType::from_code(3), None);
    assert_eq!(NeuronType::from_code(-1), None);
}
