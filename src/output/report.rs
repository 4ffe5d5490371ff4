// Fri Oct 16 2026 - Alex

use crate::structure::{StructureComparison, StructureLayout};
use crate::ui::table::{Alignment, TableBuilder};
use colored::*;

pub struct ReportGenerator {
    use_color: bool,
    include_details: bool,
    include_padding: bool,
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            use_color: true,
            include_details: true,
            include_padding: false,
        }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn with_details(mut self, include: bool) -> Self {
        self.include_details = include;
        self
    }

    pub fn with_padding(mut self, include: bool) -> Self {
        self.include_padding = include;
        self
    }

    pub fn generate(&self, comparisons: &[StructureComparison]) -> String {
        let mut out = String::new();

        for comparison in comparisons {
            out.push_str(&self.struct_section(comparison));
            out.push('\n');
        }

        let divergent = comparisons.iter().filter(|c| !c.is_equivalent()).count();
        let summary = if divergent == 0 {
            format!("All {} struct(s) have identical host and device layouts", comparisons.len())
        } else {
            format!("{} of {} struct(s) diverge between host and device", divergent, comparisons.len())
        };
        out.push_str(&self.paint(&summary, divergent == 0));
        out.push('\n');
        out
    }

    fn struct_section(&self, comparison: &StructureComparison) -> String {
        let status = if comparison.is_equivalent() { "MATCH" } else { "DIVERGES" };
        let mut out = format!(
            "{} [{}] host {} = {} bytes, device {} = {} bytes\n",
            comparison.name,
            self.paint(status, comparison.is_equivalent()),
            comparison.host.policy(),
            comparison.host.size(),
            comparison.device.policy(),
            comparison.device.size(),
        );

        if self.include_details {
            out.push_str(&self.field_table(comparison));
            out.push('\n');
        }
        for divergence in comparison.field_divergences() {
            if divergence.field_name().map_or(false, |f| f.contains('.')) {
                out.push_str(&format!("  {} [{:+}]\n", divergence, divergence.offset_delta()));
            }
        }
        if self.include_padding {
            out.push_str(&self.padding_lines("host", &comparison.host));
            out.push_str(&self.padding_lines("device", &comparison.device));
        }
        out
    }

    fn field_table(&self, comparison: &StructureComparison) -> String {
        let mut table = TableBuilder::new()
            .with_headers(&["field", "type", "host off", "host size", "dev off", "dev size", ""])
            .with_color(self.use_color);
        for column in 2..6 {
            table = table.with_alignment(column, Alignment::Right);
        }

        for host in comparison.host.fields() {
            let Some(device) = comparison.device.get_field(host.name()) else {
                continue;
            };
            let same = host.offset() == device.offset() && host.size() == device.size();
            table = table.add_row(&[
                host.name().to_string(),
                host.field_type().to_string(),
                host.offset().to_string(),
                host.size().to_string(),
                device.offset().to_string(),
                device.size().to_string(),
                self.paint(if same { "ok" } else { "!=" }, same),
            ]);
        }
        table.build()
    }

    fn padding_lines(&self, side: &str, layout: &StructureLayout) -> String {
        layout
            .padding()
            .iter()
            .map(|p| format!("  {} padding: {} byte(s) at {}\n", side, p.bytes, p.offset))
            .collect()
    }

    fn paint(&self, text: &str, good: bool) -> String {
        match (self.use_color, good) {
            (false, _) => text.to_string(),
            (true, true) => text.green().to_string(),
            (true, false) => text.red().bold().to_string(),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain listing of a single layout, for the `layout` command.
pub fn describe_layout(layout: &StructureLayout, use_color: bool) -> String {
    let mut table = TableBuilder::new()
        .with_headers(&["offset", "size", "align", "type", "field"])
        .with_alignment(0, Alignment::Right)
        .with_alignment(1, Alignment::Right)
        .with_alignment(2, Alignment::Right)
        .with_color(use_color);
    for field in layout.fields() {
        table = table.add_row(&[
            field.offset().to_string(),
            field.size().to_string(),
            field.alignment().to_string(),
            field.field_type().to_string(),
            field.name().to_string(),
        ]);
    }

    let mut out = format!(
        "{} under {}: size {}, data {}, align {}, {} padding byte(s)\n",
        layout.name(),
        layout.policy(),
        layout.size(),
        layout.data_size(),
        layout.alignment(),
        layout.padding_bytes()
    );
    out.push_str(&table.build());
    out.push('\n');
    out
}
