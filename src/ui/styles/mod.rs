// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for toasts, dialogs and pages.

pub mod button;
pub mod container;
