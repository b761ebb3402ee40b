pub mod cmd;
pub mod conf;
pub mod err;
pub mod pkg;
pub mod prelude;
