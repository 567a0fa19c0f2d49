pub mod cats;
pub mod init;
pub mod periods;
pub mod plot;
pub mod records;
pub mod root;
pub mod sum;
pub mod view;
