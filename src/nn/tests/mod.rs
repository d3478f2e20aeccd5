mod handle;
mod network_basic;
