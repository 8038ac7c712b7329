//! Demo data for the viewer
//! Synthetic sensor readings with a few dropped samples

use std::sync::Arc;
use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use pc_data::NumericTable;
use anyhow::Result;

const ROWS: usize = 300;

/// Build the demo table
pub fn demo_table() -> Result<NumericTable> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("time", DataType::Int64, false),
        Field::new("temperature", DataType::Float64, true),
        Field::new("pressure", DataType::Float64, true),
        Field::new("humidity", DataType::Float64, true),
        Field::new("wind_speed", DataType::Float64, true),
        Field::new("power", DataType::Float64, true),
        Field::new("station", DataType::Utf8, false),
    ]));

    let mut time = Vec::with_capacity(ROWS);
    let mut temperature = Vec::with_capacity(ROWS);
    let mut pressure = Vec::with_capacity(ROWS);
    let mut humidity = Vec::with_capacity(ROWS);
    let mut wind_speed = Vec::with_capacity(ROWS);
    let mut power = Vec::with_capacity(ROWS);
    let mut station = Vec::with_capacity(ROWS);

    for i in 0..ROWS {
        let idx = i as f64;
        let t = idx * 0.05;
        let noise = (idx * 12345.6789).sin();

        time.push(i as i64);

        let temp = 15.0 + (t * 0.7).sin() * 8.0 + noise * 2.0;
        temperature.push(Some(temp));

        // Pressure sensor drops every 37th sample
        pressure.push((i % 37 != 5).then(|| 1013.0 - temp * 0.8 + (t * 1.3).cos() * 4.0));

        humidity.push(Some((60.0 - temp * 1.2 + noise * 10.0).clamp(5.0, 100.0)));

        let wind = (4.0 + (t * 2.1).sin() * 3.0 + noise.abs() * 2.5).max(0.0);
        wind_speed.push((i % 53 != 11).then_some(wind));

        power.push(Some(wind.powi(3) * 0.6 + noise * 5.0));

        station.push(["north", "south", "east"][i % 3]);
    }

    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int64Array::from(time)),
        Arc::new(Float64Array::from(temperature)),
        Arc::new(Float64Array::from(pressure)),
        Arc::new(Float64Array::from(humidity)),
        Arc::new(Float64Array::from(wind_speed)),
        Arc::new(Float64Array::from(power)),
        Arc::new(StringArray::from(station)),
    ];

    let batch = RecordBatch::try_new(schema, columns)?;
    Ok(NumericTable::from_record_batch(&batch)?)
}
