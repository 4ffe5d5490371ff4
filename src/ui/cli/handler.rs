// Fri Oct 16 2026 - Alex

use super::args::{Args, CheckArgs, Command, LayoutArgs, TypeArgs};
use crate::config::Config;
use crate::output::{report::describe_layout, JsonSerializer, ReportFormat, ReportGenerator};
use crate::structure::{
    compute_layout, FieldType, PackingPolicy, SchemaRegistry, StructureComparator, StructureValidator,
};
use anyhow::Context;
use colored::Colorize;
use std::fs;

pub const EXIT_OK: i32 = 0;
pub const EXIT_DIVERGENCE: i32 = 1;

pub struct CommandHandler {
    registry: SchemaRegistry,
}

impl CommandHandler {
    pub fn new() -> anyhow::Result<Self> {
        let registry = SchemaRegistry::builtin().context("failed to build the struct catalogue")?;
        Ok(Self { registry })
    }

    /// Runs a command and returns the process exit code.
    pub fn execute(&self, args: Args) -> anyhow::Result<i32> {
        self.setup_logging(&args);
        if args.no_color {
            colored::control::set_override(false);
        }

        let mut config = match &args.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => Config::new(),
        };
        if args.no_color {
            config.use_color = false;
        }

        match args.command {
            Command::Check(check_args) => self.handle_check(check_args, config, args.quiet),
            Command::Layout(layout_args) => self.handle_layout(layout_args, &config),
            Command::Type(type_args) => self.handle_type(type_args),
            Command::List => self.handle_list(),
        }
    }

    fn setup_logging(&self, args: &Args) {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Warn,
        };

        let _ = env_logger::Builder::new()
            .filter_level(if args.quiet { log::LevelFilter::Error } else { level })
            .format_timestamp(None)
            .try_init();
    }

    fn handle_check(&self, args: CheckArgs, config: Config, quiet: bool) -> anyhow::Result<i32> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let nested = args.nested || config.compare_nested;
        let host = args.host.unwrap_or(config.host_policy);
        let device = args.device.unwrap_or(config.device_policy);
        let mut config = config.with_nested(nested).with_policies(host, device);
        if let Some(format) = args.format {
            config = config.with_format(format);
        }
        if let Some(output) = args.output {
            config = config.with_output_file(output);
        }
        if !args.structs.is_empty() {
            config = config.with_structs(args.structs);
        }
        config.validate()?;

        let comparator = StructureComparator::new(config.host_policy, config.device_policy)
            .with_nested(config.compare_nested);
        log::info!(
            "Comparing host {} against device {}",
            comparator.host_policy(),
            comparator.device_policy()
        );
        let comparisons = if config.structs.is_empty() {
            comparator.compare_all(&self.registry)
        } else {
            config
                .structs
                .iter()
                .map(|name| -> anyhow::Result<_> { Ok(comparator.compare(self.registry.get(name)?)) })
                .collect::<anyhow::Result<Vec<_>>>()?
        };

        let validator = StructureValidator::new();
        for comparison in &comparisons {
            validator.validate(&comparison.host)?;
            validator.validate(&comparison.device)?;
        }

        let report = match config.format {
            ReportFormat::Text => ReportGenerator::new()
                .with_color(config.use_color && config.output_file.is_none())
                .with_details(!args.summary)
                .with_padding(args.padding)
                .generate(&comparisons),
            ReportFormat::Json => JsonSerializer::new()
                .with_pretty_print(config.pretty_json)
                .serialize(&comparisons)?,
        };

        match &config.output_file {
            Some(path) => {
                fs::write(path, &report)
                    .with_context(|| format!("failed to write report to {}", path.display()))?;
                if !quiet {
                    println!("{}", format!("Report written to: {}", path.display()).green());
                }
            }
            None if !quiet => print!("{}", report),
            None => {}
        }

        let divergent = comparisons.iter().any(|c| !c.is_equivalent());
        if divergent && config.fail_on_divergence {
            Ok(EXIT_DIVERGENCE)
        } else {
            Ok(EXIT_OK)
        }
    }

    fn handle_layout(&self, args: LayoutArgs, config: &Config) -> anyhow::Result<i32> {
        let schema = self.registry.get(&args.name)?;
        let layout = compute_layout(schema, args.policy);
        StructureValidator::new().validate(&layout)?;
        print!("{}", describe_layout(&layout, config.use_color));
        Ok(EXIT_OK)
    }

    fn handle_type(&self, args: TypeArgs) -> anyhow::Result<i32> {
        let ty: FieldType = args.name.parse()?;
        match ty.lanes() {
            Some(lanes) => println!("{} ({} lanes)", ty.to_string().cyan().bold(), lanes),
            None => println!("{}", ty.to_string().cyan().bold()),
        }
        for policy in PackingPolicy::ALL {
            let (size, alignment) = policy.layout_of(&ty);
            println!(
                "  {:<14} size {:>2}, stride {:>2}, align {:>2}  ({})",
                policy.name(),
                size,
                alignment.align(size),
                alignment.as_u64(),
                policy.description()
            );
        }
        Ok(EXIT_OK)
    }

    fn handle_list(&self) -> anyhow::Result<i32> {
        for schema in self.registry.iter() {
            println!("{}\n", schema);
        }
        Ok(EXIT_OK)
    }
}
