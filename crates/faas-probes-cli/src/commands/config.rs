use faas_probes::ProbeConfig;

pub fn show(config: &ProbeConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
