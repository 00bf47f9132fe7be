use crate::core::{AnalysisReport, EdgeReport};
use colored::*;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
    Csv,
    Dot,
}

/// Which derived graph the row-oriented writers render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphView {
    Full,
    Singular,
}

impl GraphView {
    pub fn edges<'a>(&self, report: &'a AnalysisReport) -> &'a [EdgeReport] {
        match self {
            GraphView::Full => &report.edges,
            GraphView::Singular => &report.singular_edges,
        }
    }
}

pub trait ReportWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

/// Pivot-table CSV: one row per (producer, consumer, signal) triple.
pub struct CsvWriter<W: Write> {
    writer: W,
    view: GraphView,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W, view: GraphView) -> Self {
        Self { writer, view }
    }
}

impl<W: Write> ReportWriter for CsvWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "HLR_Out,HLR_In,Signals")?;
        for edge in self.view.edges(report) {
            for signal in &edge.signals {
                writeln!(self.writer, "{},{},{}", edge.producer, edge.consumer, signal)?;
            }
        }
        Ok(())
    }
}

/// Graphviz text: one statement per aggregated edge, labelled with its
/// weight.
pub struct DotWriter<W: Write> {
    writer: W,
    view: GraphView,
}

impl<W: Write> DotWriter<W> {
    pub fn new(writer: W, view: GraphView) -> Self {
        Self { writer, view }
    }
}

impl<W: Write> ReportWriter for DotWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        writeln!(self.writer, "digraph HLR {{")?;
        for edge in self.view.edges(report) {
            writeln!(
                self.writer,
                "  {} -> {} [label=\"{}\"];",
                edge.producer, edge.consumer, edge.weight
            )?;
        }
        writeln!(self.writer, "}}")?;
        Ok(())
    }
}

/// Whole-report JSON, both edge views included.
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
    view: GraphView,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, view: GraphView) -> Self {
        Self { writer, view }
    }

    fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Sigmap Signal Flow Report".bold().blue())?;
        writeln!(self.writer, "{}", "=========================".blue())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let s = &report.summary;
        writeln!(self.writer, "Summary:")?;
        writeln!(self.writer, "  Modules scanned: {}", s.modules)?;
        writeln!(self.writer, "  Total signals: {}", s.signals)?;
        writeln!(self.writer, "  Declaration facts: {}", s.facts)?;
        writeln!(self.writer, "  Module pairs: {}", s.edges)?;
        writeln!(self.writer, "  Singular-consumer pairs: {}", s.singular_edges)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_edges(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let edges = self.view.edges(report);
        if edges.is_empty() {
            writeln!(self.writer, "No module dependencies derived.")?;
            writeln!(self.writer)?;
            return Ok(());
        }

        let mut heaviest: Vec<&EdgeReport> = edges.iter().collect();
        heaviest.sort_by(|a, b| b.weight.cmp(&a.weight));

        writeln!(self.writer, "Heaviest dependencies (top 10):")?;
        for edge in heaviest.iter().take(10) {
            writeln!(
                self.writer,
                "  {} -> {} ({} signal{})",
                edge.producer.yellow(),
                edge.consumer.yellow(),
                edge.weight,
                if edge.weight == 1 { "" } else { "s" }
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_quiet_modules(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.quiet_modules.is_empty() {
            return Ok(());
        }
        writeln!(
            self.writer,
            "{} ({}):",
            "Modules with no declared signals".yellow(),
            report.quiet_modules.len()
        )?;
        for name in &report.quiet_modules {
            writeln!(self.writer, "  - {name}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_warnings(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.warnings.is_empty() {
            return Ok(());
        }
        writeln!(
            self.writer,
            "{} ({}):",
            "Non-signal annotations".red(),
            report.warnings.len()
        )?;
        for warning in &report.warnings {
            writeln!(self.writer, "  - {warning}")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header()?;
        self.write_summary(report)?;
        self.write_edges(report)?;
        self.write_quiet_modules(report)?;
        self.write_warnings(report)?;
        Ok(())
    }
}

pub fn create_writer(
    format: OutputFormat,
    view: GraphView,
    target: Box<dyn Write>,
) -> Box<dyn ReportWriter> {
    match format {
        OutputFormat::Terminal => Box::new(TerminalWriter::new(target, view)),
        OutputFormat::Json => Box::new(JsonWriter::new(target)),
        OutputFormat::Csv => Box::new(CsvWriter::new(target, view)),
        OutputFormat::Dot => Box::new(DotWriter::new(target, view)),
    }
}
