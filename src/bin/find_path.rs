//! Finds a stitched path through waypoints given on the command line.
//!
//! Each `--waypoint LAT,LNG` is treated as a map click, in order.

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use waypoint_planner::config::PlannerConfig;
use waypoint_planner::details::PathDetails;
use waypoint_planner::notify::TracingNotifier;
use waypoint_planner::orchestrator::StitchPolicy;
use waypoint_planner::osrm::OsrmClient;
use waypoint_planner::path_service::PathServiceClient;
use waypoint_planner::session::RoutingSession;
use waypoint_planner::viewport::{HeadlessViewport, MapEvent};

/// Stitch a multi-waypoint path and overlay road geometry
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Waypoint as LAT,LNG (repeat, in visiting order)
    #[arg(long = "waypoint", short = 'w', value_parser = parse_point)]
    waypoints: Vec<(f64, f64)>,

    /// Pathfinding service base URL (overrides PATH_API_BASE_URL)
    #[arg(long)]
    api_base: Option<String>,

    /// OSRM base URL (overrides OSRM_BASE_URL)
    #[arg(long)]
    osrm_base: Option<String>,

    /// Boundary joining policy: best-effort or strict
    #[arg(long)]
    stitch_policy: Option<StitchPolicy>,

    /// Print the stitched path as JSON instead of the summary
    #[arg(long)]
    json: bool,
}

fn parse_point(s: &str) -> Result<(f64, f64), String> {
    let (lat, lng) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LNG, got '{}'", s))?;
    let lat = lat.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let lng = lng.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok((lat, lng))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("waypoint_planner=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let mut config = PlannerConfig::from_env();
    if let Some(url) = args.api_base {
        config.path_service.base_url = url;
    }
    if let Some(url) = args.osrm_base {
        config.osrm.base_url = url;
    }
    if let Some(policy) = args.stitch_policy {
        config.stitch_policy = policy;
    }

    let finder = PathServiceClient::new(config.path_service.clone()).context("build path service client")?;
    let geometry = OsrmClient::new(config.osrm.clone()).context("build OSRM client")?;
    let mut session = RoutingSession::new(&config, finder, geometry, HeadlessViewport::new(), TracingNotifier);

    for point in args.waypoints {
        // Rejections are already reported through the notifier.
        let _ = session.handle_event(MapEvent::Click(point));
    }

    let stitched = session.find_path()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stitched)?);
    } else {
        print!("{}", PathDetails::new(Some(&stitched)));
        if let Some(summary) = session.last_render() {
            println!(
                "Overlay: {} hops drawn, {} without route, {} failed",
                summary.drawn, summary.empty, summary.failed
            );
        }
    }

    Ok(())
}
