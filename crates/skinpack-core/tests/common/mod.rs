pub mod skin_server;
