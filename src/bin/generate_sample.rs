//! Write a synthetic launch CSV with the published column layout.
//!
//! Usage: `generate_sample [output.csv]` (default `sample_launches.csv`).

use anyhow::{Context, Result};

use launch_dash::data::model::LaunchRecord;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[(self.next_u64() % items.len() as u64) as usize]
    }
}

/// Booster generations in flight order: (category, serial prefix, landing
/// success probability, heaviest payload in kg).
const ERAS: [(&str, &str, f64, f64); 5] = [
    ("v1.0", "F9 v1.0 B00", 0.0, 700.0),
    ("v1.1", "F9 v1.1 B10", 0.15, 4500.0),
    ("FT", "F9 FT B10", 0.7, 9600.0),
    ("B4", "F9 B4 B10", 0.6, 7000.0),
    ("B5", "F9 B5 B10", 0.9, 9600.0),
];

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

const FLIGHTS: u32 = 60;

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_launches.csv".to_string());
    let mut rng = SimpleRng::new(42);

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {output_path}"))?;

    for flight in 1..=FLIGHTS {
        let era = ((flight - 1) * ERAS.len() as u32 / FLIGHTS) as usize;
        let (category, serial, p_success, max_payload) = ERAS[era];

        // Payloads come in round-ish tens of kilograms; early flights carried
        // dummy masses of zero now and then.
        let payload = if flight <= 2 {
            0.0
        } else {
            (rng.next_f64() * max_payload / 10.0).round() * 10.0
        };

        let record = LaunchRecord {
            flight_number: Some(flight),
            launch_site: rng.pick(&SITES).to_string(),
            outcome: u8::from(rng.next_f64() < p_success),
            payload_mass_kg: payload,
            booster_version: Some(format!("{serial}{:02}", flight)),
            booster_category: category.to_string(),
        };
        writer
            .serialize(&record)
            .with_context(|| format!("writing flight {flight}"))?;
    }
    writer.flush().context("flushing output")?;

    log::info!("Wrote {FLIGHTS} launches to {output_path}");
    println!("Wrote {FLIGHTS} launches to {output_path}");
    Ok(())
}
