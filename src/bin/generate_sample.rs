//! Writes a deterministic `sales_data.csv` for trying out the dashboard:
//! `cargo run --bin generate_sample`

use chrono::{Days, NaiveDate};

const OUTPUT: &str = "sales_data.csv";
const ROWS: usize = 500;

const REGIONS: [&str; 4] = ["North", "South", "East", "West"];
const PRODUCTS: [&str; 6] = ["Widget", "Gadget", "Doodad", "Gizmo", "Sprocket", "Flange"];

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

    /// Uniform float in [0, 1).
    fn uniform(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in [0, n).
    fn below(&mut self, n: usize) -> usize {
        (self.uniform() * n as f64) as usize
    }
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);
    let year_start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let mut writer = csv::Writer::from_path(OUTPUT)?;
    writer.write_record(["Date", "Region", "Product", "Sales", "Quantity"])?;

    for _ in 0..ROWS {
        let date = year_start + Days::new(rng.below(366) as u64);
        let region = REGIONS[rng.below(REGIONS.len())];
        let product = PRODUCTS[rng.below(PRODUCTS.len())];
        // Skewed amounts: many small orders, occasional large ones.
        let quantity = 1 + rng.below(9) as u64;
        let unit_price = 20.0 + 480.0 * rng.uniform().powi(2);
        let sales = (unit_price * quantity as f64 * 100.0).round() / 100.0;

        writer.write_record([
            date.to_string(),
            region.to_string(),
            product.to_string(),
            format!("{sales:.2}"),
            quantity.to_string(),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {ROWS} rows to {OUTPUT}");
    Ok(())
}
