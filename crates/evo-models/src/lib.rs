/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! # evo-models
//!
//! Data models for Evolution API requests and responses.
//!
//! Request types implement [`evo_core::Validate`] so that malformed input is
//! rejected before a request leaves the process. Response types keep every
//! field the server may omit as `Option`, which keeps "not returned" distinct
//! from "returned but empty".
//!
//! ## Usage
//!
//! ```ignore
//! use evo_models::message::SendText;
//! use evo_core::Validate;
//!
//! let msg = SendText::new("5511999999999", "hello");
//! msg.validate()?;
//! let body = serde_json::to_string(&msg)?;
//! ```

#![warn(clippy::all)]

pub mod call;
pub mod chat;
pub mod chatbot;
pub mod chatwoot;
pub mod common;
pub mod events;
pub mod group;
pub mod instance;
pub mod label;
pub mod message;
pub mod profile;
pub mod proxy;
pub mod settings;
pub mod template;

// Re-export common types for convenience
pub use common::*;
pub use events::Event;
