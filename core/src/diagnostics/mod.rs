mod traceback;

pub use traceback::write_traceback;
