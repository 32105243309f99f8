//! acquaintance: two diseases spreading through three contact networks.
//!
//! 200 agents share one town-wide acquaintance network.  The first 60 are
//! also split into small partner networks, and agents 100..200 belong to a
//! club whose network closes for disease 1 between days 10 and 20.  Disease 1
//! uses two transmission groups: the younger half of the population (group 1)
//! is more susceptible.
//!
//! Usage: `acquaintance [DATA_DIR]` (defaults to this crate's `data/`).

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use log::{LevelFilter, info, warn};
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use cn_core::{AgentId, Day, DiseaseId, GeoPoint, GroupId, NetworkId, RunConfig};
use cn_driver::{DayObserver, DriverBuilder, Exposure, HealthState, HealthTable};
use cn_network::{AssignedGroups, ClosedForDiseases, ContactNetwork, DiseaseGroups, Network, SingleGroup};
use cn_params::{NetworkParams, get_parameters};
use cn_place::{ClosureWindow, Place, PlaceKind};

// ── Constants ─────────────────────────────────────────────────────────────────

const AGENT_COUNT:   u32 = 200;
const PARTNERED:     u32 = 60;  // agents 0..60 are paired into partner networks
const CLUB_START:    u32 = 100; // agents 100..200 form the club
const YOUNG_START:   u32 = 100; // disease-1 group 1
const TOWN:          GeoPoint = GeoPoint { lat: 40.4406, lon: -79.9959 };

// ── Logging ───────────────────────────────────────────────────────────────────

fn init_logging(level: LevelFilter) -> Result<()> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d(%H:%M:%S%.3f)} {h({l:<5})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs daily new infections per disease.
struct DailyCases {
    disease_count: usize,
}

impl DayObserver for DailyCases {
    fn on_day_end(&mut self, day: Day, exposures: &[Exposure], new_infections: usize) {
        let mut per_disease = vec![0usize; self.disease_count];
        for e in exposures {
            per_disease[e.disease.index()] += 1;
        }
        info!("{day}: {new_infections} new infections {per_disease:?}");
    }
}

// ── Network construction ──────────────────────────────────────────────────────

fn members(range: std::ops::Range<u32>) -> impl Iterator<Item = AgentId> {
    range.map(AgentId)
}

fn build_networks(params: &std::sync::Arc<NetworkParams>) -> Result<Vec<Box<dyn ContactNetwork>>> {
    let young: AssignedGroups = (0..AGENT_COUNT)
        .map(|a| (AgentId(a), GroupId(u16::from(a >= YOUNG_START))))
        .collect();
    let groups = || DiseaseGroups::new(SingleGroup).with_override(DiseaseId(1), young.clone());

    let mut networks: Vec<Box<dyn ContactNetwork>> = Vec::new();

    let town = Place::with_members(
        "town acquaintances",
        PlaceKind::AcquaintanceNetwork,
        TOWN,
        members(0..AGENT_COUNT),
    )?;
    let town = Network::new(NetworkId(0), town, params.clone())?.with_groups(groups());
    town.print();
    networks.push(Box::new(town));

    let club = Place::with_members("club", PlaceKind::Network, TOWN, members(CLUB_START..AGENT_COUNT))?;
    let club = Network::new(NetworkId(1), club, params.clone())?
        .with_groups(groups())
        .with_gate(ClosedForDiseases::new([DiseaseId(1)], ClosureWindow::new(Day(10), Day(20))));
    club.print();
    networks.push(Box::new(club));

    for (pair, first) in (0..PARTNERED).step_by(2).enumerate() {
        let place = Place::with_members(
            format!("partners {pair}"),
            PlaceKind::SexualPartnerNetwork,
            TOWN,
            members(first..first + 2),
        )?;
        let id = NetworkId(2 + pair as u32);
        networks.push(Box::new(Network::new(id, place, params.clone())?.with_groups(groups())));
    }

    Ok(networks)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_logging(LevelFilter::Info)?;

    let data_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("data"));

    // 1. Run configuration.
    let run_path = data_dir.join("run.json");
    let config: RunConfig = serde_json::from_reader(
        File::open(&run_path).with_context(|| format!("opening {}", run_path.display()))?,
    )
    .with_context(|| format!("parsing {}", run_path.display()))?;
    config.validate()?;
    info!("run: seed {} | {} days | {} diseases", config.seed, config.days, config.disease_count);

    // 2. Parameters, once, shared by every network.
    let params = get_parameters(&data_dir.join("params.json"), config.disease_count)?;
    let from_csv = get_parameters(&data_dir.join("params.csv"), config.disease_count)?;
    if *from_csv != *params {
        warn!("params.csv and params.json disagree; using params.json");
    }

    // 3. Networks.
    let networks = build_networks(&params)?;
    let members_total: usize = networks.iter().map(|n| n.get_container_size()).sum();
    info!("{} networks, {members_total} memberships", networks.len());

    // 4. Seed infections.
    let mut health = HealthTable::new(AGENT_COUNT as usize, config.disease_count);
    health.infect(AgentId(0), DiseaseId(0));
    health.infect(AgentId(CLUB_START + 1), DiseaseId(1));

    // 5. Run.
    let mut driver = DriverBuilder::new(config.clone()).networks(networks).build()?;
    let mut observer = DailyCases { disease_count: usize::from(config.disease_count) };

    let t0 = Instant::now();
    let total = driver.run(&mut health, &mut observer)?;
    let elapsed = t0.elapsed();

    // 6. Summary.
    println!();
    println!("=== acquaintance: {total} infections in {:.1} ms ===", elapsed.as_secs_f64() * 1e3);
    for disease in config.diseases() {
        let infected = health.count(disease, HealthState::Infectious);
        println!(
            "  {disease}: {infected}/{AGENT_COUNT} infected ({:.1}%)",
            100.0 * infected as f64 / f64::from(AGENT_COUNT),
        );
    }
    Ok(())
}
