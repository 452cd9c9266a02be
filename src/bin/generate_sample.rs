use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

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

fn main() {
    let mut rng = SimpleRng::new(42);

    // (site, launches, success-rate bonus)
    let sites: [(&str, usize, f64); 4] = [
        ("CCAFS LC-40", 26, 0.0),
        ("CCAFS SLC-40", 7, 0.05),
        ("KSC LC-39A", 13, 0.10),
        ("VAFB SLC-4E", 10, -0.05),
    ];

    // (booster version category, payload mean kg, payload sigma kg, success rate)
    let boosters: [(&str, f64, f64, f64); 5] = [
        ("v1.0", 1500.0, 700.0, 0.10),
        ("v1.1", 3000.0, 1200.0, 0.25),
        ("FT", 5500.0, 2000.0, 0.65),
        ("B4", 4500.0, 1800.0, 0.55),
        ("B5", 5000.0, 1500.0, 0.90),
    ];

    let mut all_site: Vec<String> = Vec::new();
    let mut all_payload: Vec<f64> = Vec::new();
    let mut all_class: Vec<i64> = Vec::new();
    let mut all_booster: Vec<String> = Vec::new();

    for &(site, launches, bonus) in &sites {
        for _ in 0..launches {
            let &(booster, mu, sigma, rate) =
                &boosters[(rng.next_u64() % boosters.len() as u64) as usize];
            let payload = rng.gauss(mu, sigma).clamp(0.0, 9600.0).round();
            let class = i64::from(rng.next_f64() < (rate + bonus).clamp(0.0, 1.0));

            all_site.push(site.to_string());
            all_payload.push(payload);
            all_class.push(class);
            all_booster.push(booster.to_string());
        }
    }
    let n = all_site.len();

    // Write CSV
    let csv_path = "sample_launches.csv";
    let mut writer = csv::Writer::from_path(csv_path).expect("Failed to create CSV file");
    writer
        .write_record([
            "Launch Site",
            "Payload Mass (kg)",
            "class",
            "Booster Version Category",
        ])
        .expect("Failed to write CSV header");
    for i in 0..n {
        let payload = all_payload[i].to_string();
        let class = all_class[i].to_string();
        writer
            .write_record([
                all_site[i].as_str(),
                payload.as_str(),
                class.as_str(),
                all_booster[i].as_str(),
            ])
            .expect("Failed to write CSV row");
    }
    writer.flush().expect("Failed to flush CSV");

    // Build Arrow arrays
    let site_array = StringArray::from(all_site.iter().map(|s| s.as_str()).collect::<Vec<_>>());
    let payload_array = Float64Array::from(all_payload);
    let class_array = Int64Array::from(all_class);
    let booster_array =
        StringArray::from(all_booster.iter().map(|s| s.as_str()).collect::<Vec<_>>());

    let schema = Arc::new(Schema::new(vec![
        Field::new("Launch Site", DataType::Utf8, false),
        Field::new("Payload Mass (kg)", DataType::Float64, false),
        Field::new("class", DataType::Int64, false),
        Field::new("Booster Version Category", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(site_array),
            Arc::new(payload_array),
            Arc::new(class_array),
            Arc::new(booster_array),
        ],
    )
    .expect("Failed to create RecordBatch");

    // Write Parquet
    let parquet_path = "sample_launches.parquet";
    let file = std::fs::File::create(parquet_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    println!("Wrote {n} launches to {csv_path} and {parquet_path}");
}
