pub mod chat_client;
pub mod chat_form;
