use clap::{Parser, Subcommand};
use hc_app::{AppResult, RunProgressEvent, RunRuntime, RunStage, run_service};
use hc_components::GeometryRatios;
use hc_project::load_run_config;
use hc_solver::ConvergenceFlag;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "hc-cli")]
#[command(about = "Hybrid rocket chamber sizing: pressure solves and geometry sweeps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a configuration file
    Validate {
        /// Path to the JSON or YAML configuration
        config_path: PathBuf,
    },
    /// Print the equilibrium reactant cards for a configuration
    Cards {
        /// Path to the JSON or YAML configuration
        config_path: PathBuf,
    },
    /// Solve the chamber pressure of a single geometry
    Solve {
        /// Path to the JSON or YAML configuration
        config_path: PathBuf,
        /// Port diameter over throat diameter
        #[arg(long)]
        dport_dt: f64,
        /// Injector diameter over throat diameter
        #[arg(long)]
        dinj_dt: f64,
        /// Chamber length over throat diameter
        #[arg(long)]
        lc_dt: f64,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sweep the configured geometry grid
    Sweep {
        /// Path to the JSON or YAML configuration
        config_path: PathBuf,
        /// Evaluate points sequentially on one thread
        #[arg(long)]
        serial: bool,
        /// Write every point to this JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { config_path } => cmd_validate(&config_path),
        Commands::Cards { config_path } => cmd_cards(&config_path),
        Commands::Solve {
            config_path,
            dport_dt,
            dinj_dt,
            lc_dt,
            json,
        } => cmd_solve(
            &config_path,
            GeometryRatios {
                dport_dt,
                dinj_dt,
                lc_dt,
            },
            json,
        ),
        Commands::Sweep {
            config_path,
            serial,
            output,
        } => cmd_sweep(&config_path, serial, output.as_deref()),
    }
}

fn cmd_validate(config_path: &Path) -> AppResult<()> {
    println!("Validating configuration: {}", config_path.display());
    let config = load_run_config(config_path)?;
    let axes = config.ranges.axes()?;
    let (ni, nj, nk) = axes.dims();
    println!("✓ Configuration is valid");
    println!("  Grid: {ni} x {nj} x {nk} = {} points", axes.len());
    println!("  Nozzle: eps = {}", config.expansion);
    Ok(())
}

fn cmd_cards(config_path: &Path) -> AppResult<()> {
    let config = load_run_config(config_path)?;
    print!("{}", config.propellant.oxidizer_card());
    print!("{}", config.propellant.fuel_cards());
    Ok(())
}

fn cmd_solve(config_path: &Path, ratios: GeometryRatios, json: bool) -> AppResult<()> {
    let config = load_run_config(config_path)?;
    let runtime = RunRuntime::from_config(&config)?;
    let report = run_service::solve_geometry(&runtime, ratios)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let c = &report.solution.convergence;
    let s = &report.solution.performance;
    println!(
        "Dport/Dt = {}, Dinj/Dt = {}, Lc/Dt = {}",
        ratios.dport_dt, ratios.dinj_dt, ratios.lc_dt
    );
    println!("  Outcome: {}", c.flag);
    println!("  Iterations: {}", c.iterations);
    if c.flag == ConvergenceFlag::NoBracketedSolution || c.pc == 0.0 {
        return Ok(());
    }
    println!("  pc = {:.4} bar (F = {:.3e} Pa)", c.pc / 1e5, c.residual);
    println!("  mdot = {:.4} kg/s per Dt², MR = {:.3}", s.mdot, s.mr);
    println!("  Tc = {:.1} K, gamma = {:.4}, eps = {:.3}", s.tc, s.gamma, s.eps_out);
    println!(
        "  c* = {:.1} m/s, CF = {:.4}, Is = {:.1} s, Ivac = {:.1} s",
        s.cs, s.cf, s.is, s.ivac
    );
    Ok(())
}

fn cmd_sweep(config_path: &Path, serial: bool, output: Option<&Path>) -> AppResult<()> {
    println!("Sweeping configuration: {}", config_path.display());

    let last_emit = Mutex::new(Instant::now());
    let render = |event: RunProgressEvent| {
        let done = event.stage != RunStage::Solving || event.completed == event.total;
        if let Ok(mut last) = last_emit.lock()
            && (done || last.elapsed().as_millis() >= 100)
        {
            render_cli_progress(&event);
            *last = Instant::now();
        }
    };
    let report = run_service::run_sweep_from_path(config_path, serial, Some(&render))?;
    clear_progress_line();

    let (ni, nj, nk) = report.result.dims();
    println!(
        "✓ Sweep completed: {ni} x {nj} x {nk} points in {:.2} s",
        report.elapsed_wall_s
    );
    println!("{}", report.counts);

    if let Some(best) = report
        .result
        .iter()
        .filter(|r| r.flag().is_converged())
        .max_by(|a, b| {
            a.solution
                .performance
                .is
                .total_cmp(&b.solution.performance.is)
        })
    {
        println!(
            "  Best Is: {:.1} s at Dport/Dt = {}, Dinj/Dt = {}, Lc/Dt = {} (pc = {:.3} bar)",
            best.solution.performance.is,
            best.dport_dt,
            best.dinj_dt,
            best.lc_dt,
            best.solution.convergence.pc / 1e5
        );
    }

    if let Some(path) = output {
        run_service::save_sweep_json(path, &report)?;
        println!("  Results written to {}", path.display());
    }
    Ok(())
}

fn clear_progress_line() {
    print!("\r{}\r", " ".repeat(100));
    let _ = io::stdout().flush();
}

fn render_cli_progress(event: &RunProgressEvent) {
    match event.stage {
        RunStage::Solving => {
            let width = 28usize;
            let fraction = event.fraction_complete();
            let filled = ((fraction * width as f64).round() as usize).min(width);
            let bar = format!(
                "{}{}",
                "#".repeat(filled),
                "-".repeat(width.saturating_sub(filled))
            );
            print!(
                "\r[{}] {:>6.2}%  points={}/{}  elapsed={:.1}s",
                bar,
                fraction * 100.0,
                event.completed,
                event.total,
                event.elapsed_wall_s
            );
        }
        _ => {
            print!(
                "\r{}  elapsed={:.2}s",
                event.stage.label(),
                event.elapsed_wall_s
            );
        }
    }
    let _ = io::stdout().flush();
}
