// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Site data model.

pub mod project;
pub mod settings;
pub mod site;
