//! Conversation turns exchanged between the chat surface and the model.

pub mod answer;
pub mod entities;
