pub mod session_cleanup;
