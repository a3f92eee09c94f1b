mod chat_mode_test;
mod session_test;
