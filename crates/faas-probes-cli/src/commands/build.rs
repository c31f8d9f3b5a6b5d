use std::path::Path;

use anyhow::Context;
use faas_probes::{Annotations, FunctionDeployment, FunctionProbes, ProbeConfig, ProbeDescriptor, ProbeFactory};
use tracing::info;

pub fn build(
    config: ProbeConfig,
    service: &str,
    flags: Vec<(String, String)>,
    annotations_file: Option<&str>,
    format: &str,
) -> anyhow::Result<()> {
    let annotations = collect_annotations(flags, annotations_file)?;
    for key in annotations.recognized() {
        info!(%key, "applying annotation override");
    }

    let deployment = FunctionDeployment::new(service).with_annotations(annotations);
    let probes = ProbeFactory::new(config)
        .make_probes(&deployment)
        .with_context(|| format!("building probes for {service}"))?;

    match format {
        "text" => print!("{}", format_probes(&probes)),
        _ => println!("{}", serde_json::to_string_pretty(&probes)?),
    }

    Ok(())
}

/// Parse a `key=value` annotation flag. The value may itself contain `=`.
pub fn parse_annotation(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got {raw:?}")),
    }
}

fn collect_annotations(
    flags: Vec<(String, String)>,
    annotations_file: Option<&str>,
) -> anyhow::Result<Annotations> {
    let mut annotations = match annotations_file {
        Some(path) => {
            let content = std::fs::read_to_string(Path::new(path))
                .with_context(|| format!("reading annotations {path}"))?;
            serde_json::from_str(&content).with_context(|| format!("parsing annotations {path}"))?
        }
        None => Annotations::new(),
    };
    annotations.extend(flags.into_iter().collect());
    Ok(annotations)
}

fn format_probes(probes: &FunctionProbes) -> String {
    let mut out = String::new();
    for (kind, probe) in [("liveness", &probes.liveness), ("readiness", &probes.readiness)] {
        out.push_str(&format_probe(kind, probe));
    }
    out
}

fn format_probe(kind: &str, probe: &ProbeDescriptor) -> String {
    format!(
        "{kind:<10} {}  delay={}s timeout={}s period={}s success={} failure={}\n",
        probe.handler,
        probe.initial_delay_seconds,
        probe.timeout_seconds,
        probe.period_seconds,
        probe.success_threshold,
        probe.failure_threshold,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_annotation_splits_on_first_equals() {
        assert_eq!(
            parse_annotation("com.openfaas.health.http.path=/a=b").unwrap(),
            ("com.openfaas.health.http.path".to_string(), "/a=b".to_string())
        );
        assert_eq!(parse_annotation("k=").unwrap(), ("k".to_string(), String::new()));
    }

    #[test]
    fn parse_annotation_rejects_malformed() {
        assert!(parse_annotation("no-equals").is_err());
        assert!(parse_annotation("=value").is_err());
    }

    #[test]
    fn flags_win_over_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"com.openfaas.health.http.path":"/file","com.openfaas.health.http.initialDelay":"5s"}}"#
        )
        .unwrap();

        let flags = vec![("com.openfaas.health.http.path".to_string(), "/flag".to_string())];
        let path = file.path().to_str().unwrap();
        let annotations = collect_annotations(flags, Some(path)).unwrap();

        assert_eq!(annotations.health_path(), Some("/flag"));
        assert_eq!(annotations.initial_delay(), Some("5s"));
    }

    #[test]
    fn text_format_lists_both_probes() {
        let probes = faas_probes::build(&ProbeConfig::default(), None).unwrap();
        let text = format_probes(&probes);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("liveness"));
        assert!(lines[1].starts_with("readiness"));
        assert!(lines[0].contains("GET :8080/_/health"));
        assert!(lines[0].contains("success=1 failure=3"));
    }
}
