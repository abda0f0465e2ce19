//! Command dispatch.

use std::io::Write;

use anyhow::Result;
use dex_content::{ContentFactory, ExplorerConfig};
use dex_core::{Explorer, Field, FilterSpec, RecordKey, RecordStore, SortSpec};
use strum::IntoEnumIterator;

use crate::args::{Cli, Command, ListArgs};
use crate::config::ClientConfig;
use crate::table::Table;

/// Run one command, writing its output to `out`.
pub fn run(cli: Cli, client: &ClientConfig, out: &mut impl Write) -> Result<()> {
    let factory = ContentFactory::new(&cli.data_dir);
    let config = factory.load_config()?;

    match cli.command {
        Command::List(args) => list(&factory, &config, client, args, out),
        Command::Show { key } => {
            let store = factory.load_catalog(&config)?;
            show(&store, &config, client, &key, out)
        }
        Command::Fields => fields(out),
        Command::Presets => presets(&factory, &config, out),
    }
}

fn list(
    factory: &ContentFactory,
    config: &ExplorerConfig,
    client: &ClientConfig,
    args: ListArgs,
    out: &mut impl Write,
) -> Result<()> {
    let store = factory.load_catalog(config)?;

    let mut filter = match &args.preset {
        Some(name) => factory.load_preset(config, name)?.into_filter(),
        None => FilterSpec::new(),
    };
    for group in args.groups.iter().chain(&args.range) {
        filter.push(group.clone());
    }

    let fusion = args.fusion();
    fusion
        .lookup(&store)
        .map_err(|e| anyhow::anyhow!("Cannot fuse: {}", e))?;

    let sort = args
        .sort
        .map(|field| SortSpec {
            field,
            ascending: !args.desc,
        })
        .or_else(|| config.initial_sort());

    let explorer = match sort {
        Some(spec) => Explorer::new(store).with_sort(spec),
        None => Explorer::new(store),
    };
    let rows = explorer.render(&filter, &fusion);

    tracing::info!(
        groups = filter.groups().len(),
        rows = rows.len(),
        fused = fusion.is_complete(),
        "Listed catalog"
    );

    let table = Table::new(config, client);
    if args.json {
        table.write_json(&rows, out)
    } else {
        table.write(&rows, out)
    }
}

fn show(
    store: &RecordStore,
    config: &ExplorerConfig,
    client: &ClientConfig,
    key: &str,
    out: &mut impl Write,
) -> Result<()> {
    let record = store
        .get(&RecordKey::from(key))
        .ok_or_else(|| anyhow::anyhow!("No record numbered {}", key))?;
    Table::new(config, client).write_record(record, out)
}

fn fields(out: &mut impl Write) -> Result<()> {
    for field in Field::iter() {
        writeln!(out, "{:<16} {}", field.as_ref(), field.kind())?;
    }
    Ok(())
}

fn presets(factory: &ContentFactory, config: &ExplorerConfig, out: &mut impl Write) -> Result<()> {
    for name in factory.list_presets(config)? {
        let preset = factory.load_preset(config, &name)?;
        match preset.description {
            Some(description) => writeln!(out, "{name}  {description}")?,
            None => writeln!(out, "{name}")?,
        }
    }
    Ok(())
}
