pub mod library;
pub mod domain;
pub mod command;
pub mod repository;
pub mod events;
pub mod controller;
