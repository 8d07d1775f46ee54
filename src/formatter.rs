//! Output formatters for loaded views.
//!
//! This module provides trait-based formatters for rendering a
//! [`LoadedView`] (or a recognizer verdict) in human-readable, JSON, and
//! compact form.

use std::path::Path;

use crate::device::Address;
use crate::recognizer::{Rejection, VectorHeader};
use crate::view::{LoadedView, Segment, SegmentBacking, SymbolKind, SymbolTable};

/// Bytes of the image shown as a hex header in verbose output.
const HEADER_PREVIEW: usize = 8;

/// Trait for formatting loaded views.
///
/// Implementors provide methods for rendering each component of a view,
/// plus a method to render the complete view.
pub trait ViewFormatter {
    /// Format the file path header.
    fn format_file(&self, path: &Path) -> String;

    /// Format device, platform, and entry point.
    fn format_summary(&self, view: &LoadedView<'_>) -> Option<String>;

    /// Format the segment list.
    fn format_segments(&self, segments: &[Segment]) -> Option<String>;

    /// Format the entry point set.
    fn format_entry_points(&self, view: &LoadedView<'_>) -> Option<String>;

    /// Format the symbol table.
    fn format_symbols(&self, symbols: &SymbolTable) -> Option<String>;

    /// Format the outcome of a recognize-only run.
    fn format_verdict(
        &self,
        path: &Path,
        device: &str,
        verdict: &Result<VectorHeader, Rejection>,
    ) -> String;

    /// Format the complete view.
    ///
    /// Default implementation concatenates all component outputs.
    fn format_view(&self, view: &LoadedView<'_>, path: &Path) -> String {
        let mut parts = vec![self.format_file(path)];

        if let Some(s) = self.format_summary(view) {
            parts.push(s);
        }
        if let Some(s) = self.format_segments(view.segments()) {
            parts.push(s);
        }
        if let Some(s) = self.format_entry_points(view) {
            parts.push(s);
        }
        if let Some(s) = self.format_symbols(view.symbols()) {
            parts.push(s);
        }

        parts.join("")
    }
}

fn hex_address(addr: Address) -> String {
    format!("0x{:08X}", addr)
}

fn backing_label(backing: &SegmentBacking) -> String {
    match backing {
        SegmentBacking::Zeroed => "zero-filled".to_string(),
        SegmentBacking::Image { offset, length } => {
            format!("file 0x{:X}+0x{:X}", offset, length)
        }
    }
}

/// Human-readable output formatter.
#[derive(Debug, Clone, Default)]
pub struct HumanFormatter {
    /// Show verbose output (image header, entry point list)
    pub verbose: bool,
    /// Quiet mode (minimal output)
    pub quiet: bool,
    /// List every symbol
    pub show_symbols: bool,
}

impl HumanFormatter {
    /// Create a new human formatter with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a verbose formatter.
    pub fn verbose() -> Self {
        Self {
            verbose: true,
            ..Self::default()
        }
    }

    /// Create a quiet formatter.
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }
}

impl ViewFormatter for HumanFormatter {
    fn format_file(&self, path: &Path) -> String {
        if self.quiet {
            String::new()
        } else {
            format!("File: {}\n", path.display())
        }
    }

    fn format_summary(&self, view: &LoadedView<'_>) -> Option<String> {
        if self.quiet {
            return None;
        }

        let mut s = String::new();
        s.push_str(&format!("  View:       {} ({})\n", view.name(), view.long_name()));
        s.push_str(&format!("  Platform:   {}\n", view.platform()));
        s.push_str(&format!("  Entry:      {}\n", hex_address(view.entry_point())));

        let functions = view.symbols().of_kind(SymbolKind::Function).count();
        let data = view.symbols().of_kind(SymbolKind::Data).count();
        s.push_str(&format!(
            "  Symbols:    {} ({} functions, {} registers)\n",
            view.symbols().len(),
            functions,
            data
        ));

        if self.verbose {
            let preview = &view.image()[..view.image().len().min(HEADER_PREVIEW)];
            s.push_str(&format!("  Header:     {}\n", hex::encode(preview)));
            s.push_str(&format!("  Size:       {} bytes\n", view.image().len()));
        }

        Some(s)
    }

    fn format_segments(&self, segments: &[Segment]) -> Option<String> {
        if segments.is_empty() || self.quiet {
            return None;
        }

        let mut s = String::from("  Segments:\n");
        for segment in segments {
            s.push_str(&format!(
                "    {:<6} {}  {}  {}\n",
                segment.name,
                segment.range,
                segment.flags,
                backing_label(&segment.backing)
            ));
        }
        Some(s)
    }

    fn format_entry_points(&self, view: &LoadedView<'_>) -> Option<String> {
        if self.quiet {
            return None;
        }
        if !self.verbose {
            return Some(format!(
                "  Entries:    {}\n",
                view.entry_points().len()
            ));
        }

        let list: Vec<String> = view
            .entry_points()
            .iter()
            .map(|&addr| hex_address(addr))
            .collect();
        Some(format!("  Entries:    {}\n", list.join(", ")))
    }

    fn format_symbols(&self, symbols: &SymbolTable) -> Option<String> {
        if symbols.is_empty() || self.quiet || !self.show_symbols {
            return None;
        }

        let mut s = String::from("  Symbol table:\n");
        for symbol in symbols {
            s.push_str(&format!(
                "    {}  {:<8}  {}\n",
                hex_address(symbol.address),
                symbol.kind,
                symbol.name
            ));
        }
        Some(s)
    }

    fn format_verdict(
        &self,
        path: &Path,
        device: &str,
        verdict: &Result<VectorHeader, Rejection>,
    ) -> String {
        match verdict {
            Ok(_) if self.quiet => format!("{}: {}\n", path.display(), device),
            Ok(header) => format!(
                "{}: {} image (SP 0x{:08X}, reset 0x{:08X})\n",
                path.display(),
                device,
                header.initial_stack_pointer,
                header.reset_vector
            ),
            Err(reason) => format!("{}: not a {} image: {}\n", path.display(), device, reason),
        }
    }

    fn format_view(&self, view: &LoadedView<'_>, path: &Path) -> String {
        if self.quiet {
            return format!(
                "{}: {} entry {}\n",
                path.display(),
                view.name(),
                hex_address(view.entry_point())
            );
        }

        let mut parts = vec![self.format_file(path)];
        if let Some(s) = self.format_summary(view) {
            parts.push(s);
        }
        if let Some(s) = self.format_segments(view.segments()) {
            parts.push(s);
        }
        if let Some(s) = self.format_entry_points(view) {
            parts.push(s);
        }
        if let Some(s) = self.format_symbols(view.symbols()) {
            parts.push(s);
        }
        parts.push(String::from("\n"));
        parts.join("")
    }
}

/// JSON output formatter.
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    /// Pretty-print JSON
    pub pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl JsonFormatter {
    /// Create a new JSON formatter with pretty printing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a compact JSON formatter.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    fn render<T: serde::Serialize>(&self, value: &T) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        let mut s = rendered.unwrap_or_else(|_| "{}".to_string());
        s.push('\n');
        s
    }
}

impl ViewFormatter for JsonFormatter {
    fn format_file(&self, _path: &Path) -> String {
        String::new() // Handled in format_view
    }

    fn format_summary(&self, _view: &LoadedView<'_>) -> Option<String> {
        None
    }

    fn format_segments(&self, _segments: &[Segment]) -> Option<String> {
        None
    }

    fn format_entry_points(&self, _view: &LoadedView<'_>) -> Option<String> {
        None
    }

    fn format_symbols(&self, _symbols: &SymbolTable) -> Option<String> {
        None
    }

    fn format_verdict(
        &self,
        path: &Path,
        device: &str,
        verdict: &Result<VectorHeader, Rejection>,
    ) -> String {
        #[derive(serde::Serialize)]
        struct VerdictJson<'a> {
            file: String,
            device: &'a str,
            recognized: bool,
            initial_stack_pointer: Option<String>,
            reset_vector: Option<String>,
            reason: Option<String>,
        }

        let output = match verdict {
            Ok(header) => VerdictJson {
                file: path.display().to_string(),
                device,
                recognized: true,
                initial_stack_pointer: Some(hex_address(header.initial_stack_pointer.into())),
                reset_vector: Some(hex_address(header.reset_vector.into())),
                reason: None,
            },
            Err(reason) => VerdictJson {
                file: path.display().to_string(),
                device,
                recognized: false,
                initial_stack_pointer: None,
                reset_vector: None,
                reason: Some(reason.to_string()),
            },
        };
        self.render(&output)
    }

    fn format_view(&self, view: &LoadedView<'_>, path: &Path) -> String {
        #[derive(serde::Serialize)]
        struct JsonOutput<'a> {
            file: String,
            view: &'a str,
            long_name: &'a str,
            platform: &'static str,
            size: usize,
            header: String,
            entry_point: String,
            entry_points: Vec<String>,
            segments: Vec<SegmentJson>,
            symbols: Vec<SymbolJson<'a>>,
        }

        #[derive(serde::Serialize)]
        struct SegmentJson {
            name: &'static str,
            start: String,
            end: String,
            flags: String,
            backing: String,
        }

        #[derive(serde::Serialize)]
        struct SymbolJson<'a> {
            address: String,
            name: &'a str,
            kind: SymbolKind,
        }

        let image = view.image();
        let output = JsonOutput {
            file: path.display().to_string(),
            view: view.name(),
            long_name: view.long_name(),
            platform: view.platform().architecture(),
            size: image.len(),
            header: hex::encode(&image[..image.len().min(HEADER_PREVIEW)]),
            entry_point: hex_address(view.entry_point()),
            entry_points: view
                .entry_points()
                .iter()
                .map(|&addr| hex_address(addr))
                .collect(),
            segments: view
                .segments()
                .iter()
                .map(|s| SegmentJson {
                    name: s.name,
                    start: hex_address(s.range.start),
                    end: hex_address(s.range.end()),
                    flags: s.flags.to_string(),
                    backing: backing_label(&s.backing),
                })
                .collect(),
            symbols: view
                .symbols()
                .iter()
                .map(|s| SymbolJson {
                    address: hex_address(s.address),
                    name: &s.name,
                    kind: s.kind,
                })
                .collect(),
        };

        self.render(&output)
    }
}

/// Compact single-line output formatter.
#[derive(Debug, Clone, Default)]
pub struct ShortFormatter;

impl ShortFormatter {
    /// Create a new short formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ViewFormatter for ShortFormatter {
    fn format_file(&self, _path: &Path) -> String {
        String::new() // Handled in format_view
    }

    fn format_summary(&self, _view: &LoadedView<'_>) -> Option<String> {
        None
    }

    fn format_segments(&self, _segments: &[Segment]) -> Option<String> {
        None
    }

    fn format_entry_points(&self, _view: &LoadedView<'_>) -> Option<String> {
        None
    }

    fn format_symbols(&self, _symbols: &SymbolTable) -> Option<String> {
        None
    }

    fn format_verdict(
        &self,
        path: &Path,
        device: &str,
        verdict: &Result<VectorHeader, Rejection>,
    ) -> String {
        let status = if verdict.is_ok() { "yes" } else { "no" };
        format!("{}\t{}\t{}\n", path.display(), device, status)
    }

    fn format_view(&self, view: &LoadedView<'_>, path: &Path) -> String {
        let flash = view
            .segments()
            .iter()
            .find(|s| matches!(s.backing, SegmentBacking::Image { .. }))
            .map(|s| hex_address(s.range.start))
            .unwrap_or_default();

        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            path.display(),
            view.name(),
            flash,
            hex_address(view.entry_point()),
            view.symbols().len(),
            view.entry_points().len()
        )
    }
}
