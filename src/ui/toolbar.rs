// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Work selector.
//!
//! A dropdown of every work plus an open button. Opening with nothing
//! selected does nothing.

use crate::models::project::Registry;

/// URL to open for a submitted selection, if any.
pub fn submitted_url(registry: &Registry, selected: Option<usize>) -> Option<&str> {
    selected
        .and_then(|index| registry.get(index))
        .map(|entry| entry.url.as_str())
}

/// Display the work selector. Returns the URL to open when submitted.
pub fn show(ui: &mut egui::Ui, registry: &Registry, selected: &mut Option<usize>) -> Option<String> {
    let mut submit = false;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let selected_text = selected
            .and_then(|index| registry.get(index))
            .map(|entry| entry.label())
            .unwrap_or_else(|| "works…".to_string());

        egui::ComboBox::from_id_source("work_select")
            .selected_text(selected_text)
            .width(240.0)
            .show_ui(ui, |ui| {
                ui.selectable_value(selected, None, "works…");
                for (index, entry) in registry.iter().enumerate() {
                    ui.selectable_value(selected, Some(index), entry.label());
                }
            });

        // Enter belongs to the dropdown (it opens the list); only the button
        // submits.
        if ui.button("open ↗").clicked() {
            submit = true;
        }
    });

    if submit {
        submitted_url(registry, *selected).map(str::to_string)
    } else {
        None
    }
}
