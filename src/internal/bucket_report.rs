#![allow(clippy::missing_docs_in_private_items)]
#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::indexing_slicing)]
#![allow(clippy::cast_precision_loss)]

//! Replays the classic three-line walkthrough, then compares how the builtin and DJB2 hashers
//! spread random keys over the buckets and charts the results.

use chaintable::{HashTable, KeyHasher, ResizePolicy, TableConfig, logger::initialize_logger};
use log::info;
use plotters::prelude::*;
use rand::{Rng, distr::Alphanumeric};

/// Buckets of the fixed-size tables used for the distribution comparison
const FIXED_CAPACITY: usize = 1024;
/// Random keys inserted into every table
const NUM_KEYS: usize = 4096;
/// Length of every random key
const KEY_LENGTH: usize = 12;
/// Cap for automatic growth in the capacity chart
const MAX_CAPACITY: usize = 1 << 14;

const HASHERS: [(&str, KeyHasher); 2] =
    [("Builtin", KeyHasher::Builtin), ("DJB2", KeyHasher::Djb2)];

fn walkthrough() -> Result<(), Box<dyn std::error::Error>> {
    let mut table = HashTable::new(2)?;

    table.insert("line_1", "Tiny hash table");
    table.insert("line_2", "Filled beyond capacity");
    table.insert("line_3", "Linked list saves the day!");

    for key in ["line_1", "line_2", "line_3"] {
        println!("{}", table.retrieve(key).copied().unwrap_or("<missing>"));
    }

    let old_capacity = table.capacity();
    table.resize();
    println!("\nResized from {old_capacity} to {}.\n", table.capacity());

    for key in ["line_1", "line_2", "line_3"] {
        println!("{}", table.retrieve(key).copied().unwrap_or("<missing>"));
    }
    println!();

    Ok(())
}

fn random_keys(count: usize) -> Vec<String> {
    let mut rng = rand::rng();
    (0..count)
        .map(|_| (&mut rng).sample_iter(&Alphanumeric).take(KEY_LENGTH).map(char::from).collect())
        .collect()
}

/// Number of buckets holding 0, 1, 2, ... pairs
fn chain_histogram(table: &HashTable<usize>) -> Vec<usize> {
    let mut histogram = vec![0; table.stats().longest_chain + 1];
    for len in table.chain_lengths() {
        histogram[len] += 1;
    }
    histogram
}

/// Capacity after every insert, under the default policy
fn capacity_growth(
    keys: &[String],
    hasher: KeyHasher,
) -> Result<Vec<usize>, Box<dyn std::error::Error>> {
    let policy = ResizePolicy::default().with_max_capacity(MAX_CAPACITY)?;
    let mut table =
        TableConfig::new().with_capacity(2).with_hasher(hasher).with_policy(policy).build()?;

    Ok(keys
        .iter()
        .enumerate()
        .map(|(i, key)| {
            table.insert(key.as_str(), i);
            table.capacity()
        })
        .collect())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    initialize_logger();
    walkthrough()?;

    let keys = random_keys(NUM_KEYS);
    info!("Generated {} random keys", keys.len());

    let mut histograms = Vec::new();
    let mut growth = Vec::new();
    for (name, hasher) in HASHERS {
        let mut table = TableConfig::new()
            .with_capacity(FIXED_CAPACITY)
            .with_hasher(hasher)
            .with_policy(ResizePolicy::manual())
            .build()?;
        for (i, key) in keys.iter().enumerate() {
            table.insert(key.as_str(), i);
        }

        let stats = table.stats();
        println!(
            "{name}: {} pairs in {} buckets, {} occupied ({:.1}%), longest chain {}",
            stats.len,
            stats.capacity,
            stats.occupied_buckets,
            stats.occupancy * 100.0,
            stats.longest_chain
        );

        histograms.push(chain_histogram(&table));
        growth.push(capacity_growth(&keys, hasher)?);
    }

    let font_family = "sans-serif";
    let colors = [RGBColor(220, 50, 50), RGBColor(50, 90, 220)];
    let line_width = 2;
    let marker_size = 4;
    let text_size = 16;
    let title_size = 35;

    // Plot 1: chain length distribution at a fixed capacity
    let root = BitMapBackend::new("chain_lengths.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_len = histograms.iter().map(Vec::len).max().unwrap_or(1);
    let max_count =
        histograms.iter().flat_map(|h| h.iter()).copied().max().unwrap_or(1) as f64 * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Chain Lengths, {NUM_KEYS} keys in {FIXED_CAPACITY} buckets"),
            (font_family, title_size),
        )
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..max_len, 0.0..max_count)?;

    chart
        .configure_mesh()
        .x_desc("Chain Length")
        .y_desc("Buckets")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (idx, (name, _)) in HASHERS.iter().enumerate() {
        let color = &colors[idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                histograms[idx].iter().enumerate().map(|(len, &count)| (len, count as f64)),
                line_style,
            ))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        chart.draw_series(
            histograms[idx]
                .iter()
                .enumerate()
                .map(|(len, &count)| Circle::new((len, count as f64), marker_size, color.filled())),
        )?;
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperRight)
        .draw()?;

    // Plot 2: capacity growth under the default policy
    let root = BitMapBackend::new("capacity_growth.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_capacity =
        growth.iter().flat_map(|g| g.iter()).copied().max().unwrap_or(1) as f64 * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Capacity Under the Default Resize Policy", (font_family, title_size))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(0..NUM_KEYS, 0.0..max_capacity)?;

    chart
        .configure_mesh()
        .x_desc("Number of Keys Inserted")
        .y_desc("Buckets")
        .axis_desc_style((font_family, text_size))
        .draw()?;

    for (idx, (name, _)) in HASHERS.iter().enumerate() {
        let color = &colors[idx % colors.len()];
        let line_style = ShapeStyle::from(color).stroke_width(line_width);

        chart
            .draw_series(LineSeries::new(
                growth[idx].iter().enumerate().map(|(i, &capacity)| (i, capacity as f64)),
                line_style,
            ))?
            .label(*name)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()?;

    println!("Generated plot images: chain_lengths.png, capacity_growth.png");

    Ok(())
}
