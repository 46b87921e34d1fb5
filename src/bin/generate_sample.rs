//! Writes a deterministic synthetic listings CSV that passes the full
//! validation suite under default parameters.

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

    /// Uniform float in [lo, hi].
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Uniform integer in [0, n).
    fn index(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    /// Pick an index according to relative weights.
    fn weighted(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        let mut target = self.next_f64() * total;
        for (i, &w) in weights.iter().enumerate() {
            if target < w {
                return i;
            }
            target -= w;
        }
        weights.len() - 1
    }
}

fn main() {
    let rows: usize = std::env::args()
        .nth(1)
        .and_then(|a| a.parse().ok())
        .unwrap_or(20_000);

    let mut rng = SimpleRng::new(42);

    // Borough weights roughly follow the real 2019 dataset; each borough
    // gets its own patch of the NYC bounding box so coordinates look sane.
    let boroughs = ["Bronx", "Brooklyn", "Manhattan", "Queens", "Staten Island"];
    let weights = [2.0, 41.0, 44.0, 12.0, 1.0];
    let patches = [
        // (lon_lo, lon_hi, lat_lo, lat_hi)
        (-73.93, -73.80, 40.79, 40.90),
        (-74.04, -73.86, 40.57, 40.74),
        (-74.02, -73.91, 40.70, 40.88),
        (-73.96, -73.70, 40.66, 40.80),
        (-74.25, -74.05, 40.50, 40.65),
    ];
    let room_types = ["Entire home/apt", "Private room", "Shared room"];

    let output_path = "sample_listings.csv";
    let mut writer = csv::Writer::from_path(output_path).expect("Failed to create output file");
    writer
        .write_record([
            "id",
            "name",
            "host_id",
            "host_name",
            "neighbourhood_group",
            "neighbourhood",
            "latitude",
            "longitude",
            "room_type",
            "price",
            "minimum_nights",
            "number_of_reviews",
            "last_review",
            "reviews_per_month",
            "calculated_host_listings_count",
            "availability_365",
        ])
        .expect("Failed to write header");

    for id in 0..rows {
        let b = rng.weighted(&weights);
        let (lon_lo, lon_hi, lat_lo, lat_hi) = patches[b];
        let latitude = rng.uniform(lat_lo, lat_hi);
        let longitude = rng.uniform(lon_lo, lon_hi);
        let room_type = room_types[rng.index(room_types.len())];
        // Whole dollars within the default [10, 350] window.
        let price = 10 + rng.index(341);
        let reviews = rng.index(120);
        // Roughly a third of real listings have never been reviewed.
        let (last_review, reviews_per_month) = if reviews == 0 {
            (String::new(), String::new())
        } else {
            (
                format!("2019-{:02}-{:02}", 1 + rng.index(6), 1 + rng.index(28)),
                format!("{:.2}", rng.uniform(0.05, 6.0)),
            )
        };

        writer
            .write_record([
                (id + 1).to_string(),
                format!("Cozy stay #{id} in {}", boroughs[b]),
                (10_000 + rng.index(5_000)).to_string(),
                format!("Host {}", rng.index(3_000)),
                boroughs[b].to_string(),
                format!("{} area {}", boroughs[b], rng.index(40)),
                format!("{latitude:.5}"),
                format!("{longitude:.5}"),
                room_type.to_string(),
                price.to_string(),
                (1 + rng.index(30)).to_string(),
                reviews.to_string(),
                last_review,
                reviews_per_month,
                (1 + rng.index(10)).to_string(),
                rng.index(366).to_string(),
            ])
            .expect("Failed to write row");
    }

    writer.flush().expect("Failed to flush output");
    println!("Wrote {rows} listings to {output_path}");
}
