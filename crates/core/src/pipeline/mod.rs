pub mod analysis_report;
pub mod process_message_use_case;
pub mod session_error;
pub mod session_logger;
pub mod symmetry_session;
