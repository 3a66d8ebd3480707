pub mod abstract_trait;
pub mod domain;
pub mod handler;
pub mod repository;
pub mod service;
pub mod state;
