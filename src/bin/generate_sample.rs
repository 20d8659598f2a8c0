//! Writes a deterministic sample launch-records CSV in the same column
//! layout the dashboard loads at startup.

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Launch campaign at one site with one booster generation:
/// (category, launch count, success probability, payload mean, payload sd).
type Campaign = (&'static str, usize, f64, f64, f64);

fn main() {
    let mut rng = SimpleRng::new(42);

    let site_campaigns: Vec<(&str, Vec<Campaign>)> = vec![
        (
            "CCAFS LC-40",
            vec![
                ("v1.0", 5, 0.0, 1200.0, 900.0),
                ("v1.1", 10, 0.2, 2800.0, 1300.0),
                ("FT", 11, 0.55, 4200.0, 2200.0),
            ],
        ),
        (
            "VAFB SLC-4E",
            vec![
                ("v1.1", 4, 0.25, 1900.0, 1500.0),
                ("FT", 6, 0.5, 5500.0, 2500.0),
            ],
        ),
        (
            "KSC LC-39A",
            vec![
                ("FT", 9, 0.75, 4800.0, 2300.0),
                ("B4", 4, 0.75, 4500.0, 2000.0),
            ],
        ),
        (
            "CCAFS SLC-40",
            vec![
                ("B4", 3, 0.35, 3300.0, 1800.0),
                ("B5", 4, 0.5, 4000.0, 2400.0),
            ],
        ),
    ];

    let output_path = "launch_records.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "Flight Number",
            "Launch Site",
            "class",
            "Payload Mass (kg)",
            "Booster Version Category",
        ])
        .expect("Failed to write header");

    let mut flight_number: u32 = 1;
    for (site, campaigns) in &site_campaigns {
        for &(category, count, success_p, payload_mean, payload_sd) in campaigns {
            for _ in 0..count {
                // Payloads clamped to the observed historical envelope,
                // rounded to whole kilograms.
                let payload = rng
                    .gauss(payload_mean, payload_sd)
                    .clamp(0.0, 9600.0)
                    .round();
                let class: u8 = (rng.next_f64() < success_p).into();

                writer
                    .write_record([
                        flight_number.to_string(),
                        site.to_string(),
                        class.to_string(),
                        format!("{payload}"),
                        category.to_string(),
                    ])
                    .expect("Failed to write row");
                flight_number += 1;
            }
        }
    }

    writer.flush().expect("Failed to flush output");
    println!(
        "Wrote {} launch records across {} sites to {output_path}",
        flight_number - 1,
        site_campaigns.len()
    );
}
