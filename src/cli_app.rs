//! Top-level CLI definition and dispatch for the demo binary.

use clap::{Parser, Subcommand, ValueEnum};
use colored::control;

use clirail::app::context::{ExecutionContext, Observables, ReturnValue};
use clirail::app::runner::{Application, Runner};
use clirail::console::adapter::SystemConsole;
use clirail::core::errors::{Result, RoutineError};
use clirail::table::model::TableModel;
use clirail::table::render::TerminalRenderer;

/// clirail — demo harness and table rendering.
#[derive(Debug, Parser)]
#[command(
    name = "clirail",
    author,
    version,
    about = "clirail - CLI script harness and table demo",
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
    /// Override the detected terminal width.
    #[arg(long, global = true, value_name = "COLS")]
    width: Option<usize>,
    /// Subcommand to execute.
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Run a sample application through the harness and exit with its code.
    Demo(DemoArgs),
    /// Render a sample table.
    Table(TableArgs),
}

#[derive(Debug, Clone, clap::Args)]
struct DemoArgs {
    /// Make the sample routine return a failing value.
    #[arg(long, conflicts_with = "raise")]
    fail: bool,
    /// Make the sample routine raise an error.
    #[arg(long)]
    raise: bool,
}

#[derive(Debug, Clone, clap::Args)]
struct TableArgs {
    /// Output format.
    #[arg(long, value_enum, default_value_t = TableFormat::Term)]
    format: TableFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TableFormat {
    Term,
    Csv,
    Html,
}

/// Dispatch the parsed CLI.
pub fn run(cli: &Cli) -> Result<()> {
    if cli.no_color {
        control::set_override(false);
    }

    let mut console = SystemConsole::new();
    if let Some(width) = cli.width {
        console = console.with_width(width);
    }
    if cli.no_color {
        console = console.with_colors_disabled();
    }

    match &cli.command {
        Command::Demo(args) => run_demo(console, args),
        Command::Table(args) => run_table(&console, args),
    }
}

/// Sample application exercising the full lifecycle.
struct GreeterDemo {
    fail: bool,
    raise: bool,
}

impl Application for GreeterDemo {
    fn title(&self) -> String {
        "clirail demo".to_string()
    }

    fn main(&mut self, observables: &mut Observables) -> std::result::Result<ReturnValue, RoutineError> {
        let greeting = "Hello World!";
        println!("{greeting}");
        observables.set("greeting", greeting);

        if self.raise {
            return Err("the demo routine was asked to raise".into());
        }
        Ok(ReturnValue::Bool(!self.fail))
    }

    fn on_success(&mut self, context: &ExecutionContext) -> std::result::Result<(), RoutineError> {
        println!(
            "Success! greeting = {}",
            context
                .observables()
                .get("greeting")
                .map_or_else(|| "<unset>".to_string(), ToString::to_string)
        );
        Ok(())
    }

    fn on_failure(&mut self, _context: &ExecutionContext) -> std::result::Result<(), RoutineError> {
        println!("Failure!");
        Ok(())
    }

    fn on_finish(&mut self, context: &ExecutionContext) -> std::result::Result<(), RoutineError> {
        println!("{}", context.summary());
        Ok(())
    }
}

fn run_demo(console: SystemConsole, args: &DemoArgs) -> Result<()> {
    let mut app = GreeterDemo {
        fail: args.fail,
        raise: args.raise,
    };
    Runner::new(console).run(&mut app)
}

fn run_table(console: &SystemConsole, args: &TableArgs) -> Result<()> {
    let mut table = TableModel::new("MyTable", ["Column1", "Column2"])?;
    table.add_row(["Value1", "Value2"])?;
    table.add_row(["Value3", "Value4"])?;
    table.add_row(["A cell with a noticeably longer value", "short"])?;

    match args.format {
        TableFormat::Term => println!("{}", TerminalRenderer::new().render(&table, console)),
        TableFormat::Csv => print!("{}", table.to_csv()),
        TableFormat::Html => println!("{}", table.to_html()),
    }
    Ok(())
}
