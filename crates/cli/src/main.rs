use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use planar::{Angle, Tolerance, Vec2d, ACCURACY};
use serde::Serialize;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod args;
mod report;

use args::{parse_angle, parse_scalar, parse_vec};
use report::{AngleReport, CompareReport, Finite, VecReport};

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Evaluate angles and 2D vectors with the planar kernel")]
struct Cmd {
    /// Absolute tolerance for approximate comparisons
    #[arg(long, default_value_t = ACCURACY, value_parser = parse_scalar)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Show every unit view and the trig values of an angle (`30deg`, `0.5rad`, `25%`)
    Angle {
        #[arg(value_parser = parse_angle, allow_hyphen_values = true)]
        angle: Angle,
    },
    /// Build a vector from radius and angle
    Polar {
        #[arg(long, value_parser = parse_scalar, allow_hyphen_values = true)]
        radius: f64,
        #[arg(value_parser = parse_angle, allow_hyphen_values = true)]
        angle: Angle,
    },
    /// a + b
    Add {
        #[arg(value_parser = parse_vec, allow_hyphen_values = true)]
        a: Vec2d,
        #[arg(value_parser = parse_vec, allow_hyphen_values = true)]
        b: Vec2d,
    },
    /// a - b
    Sub {
        #[arg(value_parser = parse_vec, allow_hyphen_values = true)]
        a: Vec2d,
        #[arg(value_parser = parse_vec, allow_hyphen_values = true)]
        b: Vec2d,
    },
    /// -a
    Neg {
        #[arg(value_parser = parse_vec, allow_hyphen_values = true)]
        a: Vec2d,
    },
    /// Compare two angles by raw rotation amount (no wrapping into one turn)
    Compare {
        #[arg(value_parser = parse_angle, allow_hyphen_values = true)]
        a: Angle,
        #[arg(value_parser = parse_angle, allow_hyphen_values = true)]
        b: Angle,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
    let cmd = Cmd::parse();
    let tol = Tolerance::new(cmd.eps);
    match cmd.action {
        Action::Angle { angle } => {
            tracing::info!(radians = angle.radians(), "angle");
            emit(&AngleReport::from(angle))
        }
        Action::Polar { radius, angle } => {
            tracing::info!(radius, degrees = angle.degrees(), "polar");
            emit(&VecReport::from(Vec2d::from_polar(radius, angle)))
        }
        Action::Add { a, b } => vector_op("add", a + b),
        Action::Sub { a, b } => vector_op("sub", a - b),
        Action::Neg { a } => vector_op("neg", -a),
        Action::Compare { a, b } => {
            tracing::info!(a = a.radians(), b = b.radians(), eps = tol.eps, "compare");
            emit(&CompareReport::new(a, b, tol))
        }
    }
}

fn vector_op(op: &str, out: Vec2d) -> Result<()> {
    tracing::info!(op, x = out.x(), y = out.y(), "vector");
    emit(&VecReport::from(out))
}

fn emit<T: Serialize + Finite>(report: &T) -> Result<()> {
    if !report.is_finite() {
        bail!("result is not finite (overflow); refusing to emit null JSON fields");
    }
    let json = serde_json::to_string_pretty(report).context("serializing report")?;
    tracing::debug!(bytes = json.len(), "emit");
    println!("{json}");
    Ok(())
}
