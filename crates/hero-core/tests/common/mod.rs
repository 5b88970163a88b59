pub mod hero_server;
