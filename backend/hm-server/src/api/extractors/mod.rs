pub mod current_session;
