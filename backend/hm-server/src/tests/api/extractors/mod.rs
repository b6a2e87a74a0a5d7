mod current_session;
