use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use yakshop_shop::{AnimalReport, Shop, StockReport};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct Report {
    day: u32,
    stock: StockReport,
    herd: Vec<AnimalReport>,
}

pub fn render(out: &mut impl Write, shop: &Shop, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(out, shop),
        OutputFormat::Json => {
            let report = Report {
                day: shop.current_day().get(),
                stock: shop.stock_report(),
                herd: shop.herd_report().herd,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn render_text(out: &mut impl Write, shop: &Shop) -> Result<()> {
    let stock = shop.stock().snapshot();
    writeln!(out, "In Stock:")?;
    writeln!(out, "\t{:.3} liters of milk", stock.milk.get())?;
    writeln!(out, "\t{} skins of wool", stock.skins)?;

    writeln!(out, "Herd:")?;
    for animal in shop.herd().animals() {
        writeln!(out, "\t{} {:.2} years old", animal.name(), animal.age().as_years())?;
    }
    Ok(())
}
