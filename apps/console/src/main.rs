//! # FleetShare Console
//!
//! Interactive text-menu front-end for the rental engine.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Build Stores ─────────────────────────────────────────────────────► │
//! │     • VehicleStore, UserStore, TripLog (all in-memory)                  │
//! │     • Seed a small demo fleet and two riders                            │
//! │                                                                         │
//! │  3. Build Services ───────────────────────────────────────────────────► │
//! │     • TripCoordinator with the default fare schedule:                   │
//! │       Hybrid(Time $0.50/min + Distance $0.20/km)                        │
//! │     • ReportingService over the trip log                                │
//! │                                                                         │
//! │  4. Run Menu Loop ────────────────────────────────────────────────────► │
//! │     • One keyboard choice per iteration; errors print and continue      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fleet_core::distance::Distance;
use fleet_core::money::{Currency, Money};
use fleet_core::pricing::PricingStrategy;
use fleet_core::types::{MembershipTier, User, Vehicle, VehicleKind};
use fleet_core::validation::{
    validate_display_name, validate_distance_km, validate_user_id, validate_vehicle_id,
};
use fleet_service::{ReportingService, TripCoordinator};
use fleet_store::{TripLog, UserStore, VehicleStore};

fn main() {
    init_tracing();
    info!("Starting FleetShare console");

    // Stores
    let vehicles = Arc::new(VehicleStore::new());
    let users = Arc::new(UserStore::new());
    let log = Arc::new(TripLog::new());
    seed_demo_fleet(&vehicles, &users);

    // Default fare schedule, matching the classic FleetShare setup.
    let schedule = PricingStrategy::hybrid(vec![
        PricingStrategy::time_based(Money::usd(50)),     // $0.50 per minute
        PricingStrategy::distance_based(Money::usd(20)), // $0.20 per km
    ]);

    // Services
    let coordinator = TripCoordinator::new(
        Arc::clone(&vehicles),
        Arc::clone(&users),
        Arc::clone(&log),
        schedule,
    );
    let reports = ReportingService::new(Arc::clone(&log));

    run_menu(&vehicles, &users, &log, &coordinator, &reports);
    println!("Goodbye!");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// A few vehicles and riders so the menu is usable immediately.
fn seed_demo_fleet(vehicles: &VehicleStore, users: &UserStore) {
    let now = Utc::now();
    vehicles.save(Vehicle::new(
        "car-1",
        "Model 3",
        VehicleKind::Car {
            fuel_type: "electric".to_string(),
        },
        Money::usd(100),
        now,
    ));
    vehicles.save(Vehicle::new(
        "ebike-1",
        "CityHopper",
        VehicleKind::EBike { battery_percent: 100 },
        Money::usd(50),
        now,
    ));
    vehicles.save(Vehicle::new(
        "scooter-1",
        "Zipper",
        VehicleKind::Scooter { max_load_kg: 150 },
        Money::usd(30),
        now,
    ));

    users.save(User::new("u-1", "Ismail", MembershipTier::Standard));
    users.save(User::new("u-2", "Nadia", MembershipTier::Premium));

    info!(vehicles = 3, users = 2, "Seeded demo fleet");
}

fn run_menu(
    vehicles: &VehicleStore,
    users: &UserStore,
    log: &TripLog,
    coordinator: &TripCoordinator,
    reports: &ReportingService,
) {
    let stdin = io::stdin();
    loop {
        println!();
        println!("=== Welcome to FleetShare ===");
        println!("1. Add Vehicle");
        println!("2. List Available Vehicles");
        println!("3. Register User");
        println!("4. Start Trip");
        println!("5. Record Distance");
        println!("6. End Trip");
        println!("7. Cancel Trip");
        println!("8. Revenue Report");
        println!("9. Exit");

        let choice = match prompt(&stdin, "Choose an option: ") {
            Some(line) => line,
            None => return, // stdin closed
        };

        match choice.trim() {
            "1" => add_vehicle(&stdin, vehicles),
            "2" => list_available(vehicles),
            "3" => register_user(&stdin, users),
            "4" => start_trip(&stdin, coordinator),
            "5" => record_distance(&stdin, coordinator),
            "6" => end_trip(&stdin, coordinator, log),
            "7" => cancel_trip(&stdin, coordinator),
            "8" => revenue_report(reports),
            "9" => return,
            _ => println!("Invalid option! Please try again."),
        }
    }
}

/// Prints a prompt and reads one trimmed line. `None` when stdin closes.
fn prompt(stdin: &io::Stdin, label: &str) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match stdin.lock().read_line(&mut line) {
        Ok(0) => None,
        Ok(_) => Some(line.trim().to_string()),
        Err(err) => {
            eprintln!("Input error: {err}");
            None
        }
    }
}

fn add_vehicle(stdin: &io::Stdin, vehicles: &VehicleStore) {
    let Some(id) = prompt(stdin, "Enter Vehicle ID: ") else { return };
    if let Err(err) = validate_vehicle_id(&id) {
        println!("{err}");
        return;
    }

    let Some(model) = prompt(stdin, "Enter Model: ") else { return };
    if let Err(err) = validate_display_name("model", &model) {
        println!("{err}");
        return;
    }

    let Some(kind_text) = prompt(stdin, "Enter Vehicle Type (Car/EBike/Scooter): ") else {
        return;
    };

    // Kind-default rates, as in the classic fleet setup.
    let (kind, rate) = match kind_text.to_ascii_lowercase().as_str() {
        "car" => (
            VehicleKind::Car {
                fuel_type: "diesel".to_string(),
            },
            Money::usd(100),
        ),
        "ebike" => (VehicleKind::EBike { battery_percent: 100 }, Money::usd(50)),
        "scooter" => (VehicleKind::Scooter { max_load_kg: 150 }, Money::usd(30)),
        other => {
            println!("Unknown vehicle type: '{other}'");
            return;
        }
    };

    vehicles.save(Vehicle::new(id.clone(), model, kind, rate, Utc::now()));
    println!("Vehicle {id} added at {rate}/min.");
}

fn list_available(vehicles: &VehicleStore) {
    let available = vehicles.list_available();
    if available.is_empty() {
        println!("No available vehicles.");
        return;
    }

    println!("Available Vehicles:");
    for vehicle in available {
        println!(
            "  {} - {} ({}) at {}/min",
            vehicle.id,
            vehicle.kind.label(),
            vehicle.model,
            vehicle.rate_per_minute
        );
    }
}

fn register_user(stdin: &io::Stdin, users: &UserStore) {
    let Some(id) = prompt(stdin, "Enter User ID: ") else { return };
    if let Err(err) = validate_user_id(&id) {
        println!("{err}");
        return;
    }

    let Some(name) = prompt(stdin, "Enter Name: ") else { return };
    if let Err(err) = validate_display_name("name", &name) {
        println!("{err}");
        return;
    }

    let Some(tier_text) = prompt(stdin, "Enter Tier (standard/premium/vip): ") else {
        return;
    };
    let tier: MembershipTier = match tier_text.parse() {
        Ok(tier) => tier,
        Err(err) => {
            println!("{err}");
            return;
        }
    };

    users.save(User::new(id.clone(), name, tier));
    println!(
        "User {id} registered ({:?}, discount multiplier {}).",
        tier,
        tier.discount_multiplier()
    );
}

fn start_trip(stdin: &io::Stdin, coordinator: &TripCoordinator) {
    let Some(user_id) = prompt(stdin, "Enter User ID: ") else { return };
    let Some(vehicle_id) = prompt(stdin, "Enter Vehicle ID: ") else { return };

    match coordinator.start(&user_id, &vehicle_id) {
        Ok(trip) => println!("Trip started! Trip ID: {}", trip.id),
        Err(err) => println!("Could not start trip: {err}"),
    }
}

fn record_distance(stdin: &io::Stdin, coordinator: &TripCoordinator) {
    let Some(trip_id) = prompt(stdin, "Enter Trip ID: ") else { return };
    let Some(km_text) = prompt(stdin, "Enter distance (km): ") else { return };

    let km: f64 = match km_text.parse() {
        Ok(km) => km,
        Err(_) => {
            println!("Not a number: '{km_text}'");
            return;
        }
    };
    if let Err(err) = validate_distance_km(km) {
        println!("{err}");
        return;
    }

    match coordinator.record_distance(&trip_id, Distance::from_km(km)) {
        Ok(()) => println!("Distance recorded: {}", Distance::from_km(km)),
        Err(err) => println!("Could not record distance: {err}"),
    }
}

fn end_trip(stdin: &io::Stdin, coordinator: &TripCoordinator, log: &TripLog) {
    let Some(trip_id) = prompt(stdin, "Enter Trip ID: ") else { return };

    match coordinator.end(&trip_id) {
        Ok(price) => {
            println!("Trip ended successfully!");
            if let Some(trip) = log.get(&trip_id) {
                println!("Duration: {} minutes", trip.duration().num_minutes());
                println!("Distance: {}", trip.distance);
            }
            println!("Price: {price}");
        }
        Err(err) => println!("Could not end trip: {err}"),
    }
}

fn cancel_trip(stdin: &io::Stdin, coordinator: &TripCoordinator) {
    let Some(trip_id) = prompt(stdin, "Enter Trip ID: ") else { return };

    match coordinator.cancel(&trip_id) {
        Ok(()) => println!("Trip canceled; the vehicle is available again."),
        Err(err) => println!("Could not cancel trip: {err}"),
    }
}

fn revenue_report(reports: &ReportingService) {
    let completed = reports.completed_trips();
    println!("Completed trips: {}", completed.len());

    match reports.total_revenue(Currency::USD) {
        Ok(total) => println!("Total revenue: {total}"),
        Err(err) => println!("Could not compute revenue: {err}"),
    }
}
