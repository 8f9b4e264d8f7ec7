// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// UI-independent models.

pub mod crop;
