pub mod data_sync;
