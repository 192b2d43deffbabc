//! In-process client over the domain service

mod client;

pub use client::NativeClient;
