//! 求人API通信

pub mod client;

pub use client::{execute, fetch_vacancies};
