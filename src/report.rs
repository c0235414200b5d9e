//! Perf report form state and its script preview.
//!
//! [`PerfReportForm`] holds everything the report window edits: the input
//! artifact, the output location, the selected device, the package profile,
//! the prefab toggles and the free-text script nodes. The GUI layer calls
//! [`PerfReportForm::script_preview`] after every edit to refresh the preview
//! pane, and [`PerfReportForm::queue_request`] when the user asks for a report.
//!
//! Queueing is simulated: it only records the request and updates the status
//! line.
//!
//! ## Examples
//!
//! ```rust
//! use flatjson::{CodecOptions, PerfReportForm};
//!
//! let mut form = PerfReportForm::new();
//! form.input_path = "captures/run1.csv".to_string();
//! form.queue_request();
//!
//! assert!(form.has_submitted_request());
//! assert_eq!(form.status_text(), "Queued report for 'captures/run1.csv' -> <unset>/report");
//!
//! let preview = form.script_preview(&CodecOptions::default());
//! assert!(preview.contains("\"input_artifact\": \"captures/run1.csv\""));
//! ```

use crate::{encode_script_with_options, CodecOptions, FlatMap, ScriptDocument};
use serde::{Deserialize, Serialize};

const UNSET_PLACEHOLDER: &str = "<unset>";
const INITIAL_STATUS: &str = "Select inputs and generate a report.";
const DEFAULT_OUTPUT_FILE: &str = "report";

/// A target device listed in the device panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    pub model: String,
    pub serial: String,
    pub location: String,
    pub status: String,
}

impl Device {
    pub fn new(
        name: impl Into<String>,
        model: impl Into<String>,
        serial: impl Into<String>,
        location: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Device {
            name: name.into(),
            model: model.into(),
            serial: serial.into(),
            location: location.into(),
            status: status.into(),
        }
    }

    /// Placeholder rows shown until real device discovery exists.
    #[must_use]
    pub fn sample_rows() -> Vec<Device> {
        vec![
            Device::new("1 node", "VRC01", "23222333", "London", "Ready"),
            Device::new("DevKit", "XR-12", "44559911", "Lab A", "Available"),
            Device::new("Perf Rig", "P52S", "23222333", "Lab B", "Reserved"),
        ]
    }
}

/// Package the report is captured against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageProfile {
    pub nickname: String,
    pub package_name: String,
    /// Never written into the script preview.
    pub security_token: String,
}

/// Capture presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefabs {
    pub best_render_quality: bool,
    pub max_throughput: bool,
    pub network_diagnostics: bool,
    pub pcaps: bool,
}

/// Editable state of the report window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerfReportForm {
    pub input_path: String,
    pub output_directory: String,
    pub output_file: String,
    pub devices: Vec<Device>,
    /// Index into `devices`; wraps around when out of range.
    pub selected_device: usize,
    pub profile: PackageProfile,
    pub prefabs: Prefabs,
    pub script_nodes: Vec<String>,
    request_submitted: bool,
    status_text: String,
}

impl Default for PerfReportForm {
    fn default() -> Self {
        PerfReportForm {
            input_path: String::new(),
            output_directory: String::new(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            devices: Device::sample_rows(),
            selected_device: 0,
            profile: PackageProfile::default(),
            prefabs: Prefabs::default(),
            script_nodes: vec![
                "Input -> Filter nodes".to_string(),
                "Calculate nodes per unique filter of node".to_string(),
                "Chart: Post Processing node time vs nodes per child of Post Processing node"
                    .to_string(),
            ],
            request_submitted: false,
            status_text: INITIAL_STATUS.to_string(),
        }
    }
}

fn value_or_placeholder(value: &str) -> &str {
    if value.is_empty() {
        UNSET_PLACEHOLDER
    } else {
        value
    }
}

impl PerfReportForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_submitted_request(&self) -> bool {
        self.request_submitted
    }

    #[must_use]
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    /// The selected device, if any devices are listed.
    #[must_use]
    pub fn selected_device(&self) -> Option<&Device> {
        if self.devices.is_empty() {
            return None;
        }
        self.devices.get(self.selected_device % self.devices.len())
    }

    /// Records a report request and updates the status line.
    pub fn queue_request(&mut self) {
        self.request_submitted = true;
        self.status_text = format!(
            "Queued report for '{}' -> {}/{}",
            value_or_placeholder(&self.input_path),
            value_or_placeholder(&self.output_directory),
            value_or_placeholder(&self.output_file),
        );
        tracing::info!(
            input = %self.input_path,
            output_directory = %self.output_directory,
            output_file = %self.output_file,
            "Perf report queued"
        );
    }

    /// Fills the input path from a picked file and the output directory from
    /// its parent, when it has one.
    pub fn apply_selected_file(&mut self, path: &std::path::Path) {
        self.input_path = path.display().to_string();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.output_directory = parent.display().to_string();
        }
        tracing::debug!(path = %path.display(), "Selected input file");
    }

    pub fn add_script_node(&mut self, description: impl Into<String>) {
        self.script_nodes.push(description.into());
        tracing::debug!(count = self.script_nodes.len(), "Script node added");
    }

    /// Removes the node at `index`, returning it if it existed.
    pub fn remove_script_node(&mut self, index: usize) -> Option<String> {
        if index >= self.script_nodes.len() {
            return None;
        }
        let removed = self.script_nodes.remove(index);
        tracing::debug!(index, count = self.script_nodes.len(), "Script node removed");
        Some(removed)
    }

    /// Builds the document shown in the script preview.
    #[must_use]
    pub fn script_document(&self) -> ScriptDocument {
        let mut document = ScriptDocument::new()
            .with_string("input_artifact", self.input_path.as_str())
            .with_string("output_directory", self.output_directory.as_str())
            .with_string("output_file", self.output_file.as_str())
            .with_string("package_name", self.profile.package_name.as_str())
            .with_string("profile_nickname", self.profile.nickname.as_str());

        if let Some(device) = self.selected_device() {
            document = document
                .with_string("device_name", device.name.as_str())
                .with_string("device_location", device.location.as_str());
        }

        document = document
            .with_bool("prefab_best_render_quality", self.prefabs.best_render_quality)
            .with_bool("prefab_max_throughput", self.prefabs.max_throughput)
            .with_bool("prefab_network_diagnostics", self.prefabs.network_diagnostics)
            .with_bool("prefab_pcaps", self.prefabs.pcaps);

        document.steps = self
            .script_nodes
            .iter()
            .enumerate()
            .map(|(index, node)| {
                let mut step = FlatMap::with_capacity(2);
                step.insert("step", (index + 1).to_string());
                step.insert("description", node.as_str());
                step
            })
            .collect();

        document
    }

    /// Encodes [`script_document`](Self::script_document) for the preview pane.
    #[must_use]
    pub fn script_preview(&self, options: &CodecOptions) -> String {
        encode_script_with_options(&self.script_document(), options)
    }
}
