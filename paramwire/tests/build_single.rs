//! Single-item builds against the sample registry.

use std::any::Any;

use anyhow::{Context, Result, anyhow, ensure};
use paramwire::{ComponentBuilder, ComponentRegistry, ConfigDocument, LifecycleStage, WireError};
use rstest::{fixture, rstest};
use test_helpers::documents::FILE_FETCHER;
use test_helpers::registry::BROKEN_CLASS;
use test_helpers::{BucketFetcher, Emitter, Fetcher, FileFetcher, sample_registry, write_document};

#[fixture]
fn registry() -> ComponentRegistry {
    sample_registry()
}

fn downcast<'a, T: Any>(fetcher: &'a (dyn Fetcher + 'static)) -> Result<&'a T> {
    let any: &(dyn Any + 'static) = fetcher;
    any.downcast_ref::<T>()
        .ok_or_else(|| anyhow!("unexpected fetcher {fetcher:?}"))
}

fn single(class: &str, params: &str) -> String {
    format!(r#"<properties><fetcher class="{class}"><params>{params}</params></fetcher></properties>"#)
}

#[rstest]
fn applies_every_value_kind(registry: ComponentRegistry) -> Result<()> {
    let fetcher = ComponentBuilder::new(&registry)
        .build_single_from_str::<dyn Fetcher>("fetcher", FILE_FETCHER)?;
    let file = downcast::<FileFetcher>(fetcher.as_ref())?;
    ensure!(file.base_path == "/srv/data");
    ensure!(file.spool_to_temp);
    ensure!(file.max_bytes == 10_000_000_000);
    ensure!(file.retries == 42);
    ensure!((file.timeout_seconds - 2.5).abs() < f64::EPSILON);
    ensure!((file.backoff - 1.5).abs() < f32::EPSILON);
    ensure!(file.extensions == ["pdf", "docx", "pdf"], "{:?}", file.extensions);
    let metadata: Vec<(&str, &str)> = file
        .metadata
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    ensure!(metadata == [("owner", "platform"), ("tier", "gold")], "{metadata:?}");
    ensure!(file.label.as_deref() == Some("primary"));
    Ok(())
}

#[rstest]
fn builds_from_a_file_on_disk(registry: ComponentRegistry) -> Result<()> {
    let file = write_document(FILE_FETCHER)?;
    let fetcher = ComponentBuilder::new(&registry)
        .build_single_from_path::<dyn Fetcher>("fetcher", file.path())?;
    ensure!(fetcher.describe() == "file:/srv/data");
    let from_reader = ComponentBuilder::new(&registry)
        .build_single_from_reader::<dyn Fetcher>("fetcher", FILE_FETCHER.as_bytes())?;
    ensure!(from_reader.describe() == fetcher.describe());
    Ok(())
}

#[rstest]
#[case("", "could not find 'fetcher'")]
#[case(
    r#"<fetcher class="demo.FileFetcher"/><fetcher class="demo.FileFetcher"/>"#,
    "there can only be one 'fetcher' in a configuration"
)]
fn requires_exactly_one_section(
    registry: ComponentRegistry,
    #[case] body: &str,
    #[case] message: &str,
) -> Result<()> {
    let source = format!("<properties>{body}</properties>");
    let err = ComponentBuilder::new(&registry)
        .build_single_from_str::<dyn Fetcher>("fetcher", &source)
        .err()
        .context("build should fail")?;
    ensure!(err.to_string() == message, "unexpected message: {err}");
    Ok(())
}

#[rstest]
fn type_constraint_names_class_and_capability(registry: ComponentRegistry) -> Result<()> {
    let err = ComponentBuilder::new(&registry)
        .build_single_from_str::<dyn Emitter>("fetcher", &single("demo.FileFetcher", ""))
        .err()
        .context("file fetcher is not an emitter")?;
    match &err {
        WireError::TypeConstraint {
            tag,
            class,
            capability,
        } => {
            ensure!(tag == "fetcher" && class == "demo.FileFetcher");
            ensure!(capability.ends_with("Emitter"), "capability was {capability}");
        }
        other => return Err(anyhow!("expected type constraint, got {other:?}")),
    }
    Ok(())
}

#[rstest]
fn type_constraint_is_raised_before_the_factory_runs(registry: ComponentRegistry) -> Result<()> {
    let err = ComponentBuilder::new(&registry)
        .build_single_from_str::<dyn Emitter>("fetcher", &single(BROKEN_CLASS, ""))
        .err()
        .context("broken fetcher is not an emitter")?;
    ensure!(matches!(err, WireError::TypeConstraint { .. }), "{err:?}");
    Ok(())
}

#[rstest]
#[case::unknown("demo.Missing", "Resolution")]
#[case::broken(BROKEN_CLASS, "Instantiation")]
#[case::composite_only("demo.CompositeFetcher", "Instantiation")]
fn resolution_failures(
    registry: ComponentRegistry,
    #[case] class: &str,
    #[case] variant: &str,
) -> Result<()> {
    let err = ComponentBuilder::new(&registry)
        .build_single_from_str::<dyn Fetcher>("fetcher", &single(class, ""))
        .err()
        .context("class cannot be built")?;
    let kind = match err {
        WireError::Resolution { .. } => "Resolution",
        WireError::Instantiation { .. } => "Instantiation",
        other => return Err(anyhow!("unexpected error {other:?}")),
    };
    ensure!(kind == variant, "expected {variant}, got {kind}");
    Ok(())
}

#[rstest]
#[case::text_list("<basePath><p>a</p></basePath>", "NoMatchingMutator")]
#[case::unknown_param("<colour>red</colour>", "NoMatchingMutator")]
#[case::bad_int("<retries>abc</retries>", "Coercion")]
#[case::bad_bool("<spoolToTemp>yes</spoolToTemp>", "Coercion")]
#[case::int_overflow("<retries>3000000000</retries>", "Coercion")]
#[case::bad_map(r#"<metadata><entry key="a" value="1"/><entry key="b"/></metadata>"#, "MalformedMapEntry")]
fn parameter_failures_abort_the_build(
    registry: ComponentRegistry,
    #[case] params: &str,
    #[case] variant: &str,
) -> Result<()> {
    let err = ComponentBuilder::new(&registry)
        .build_single_from_str::<dyn Fetcher>("fetcher", &single("demo.FileFetcher", params))
        .err()
        .context("parameter is invalid")?;
    let kind = match err {
        WireError::NoMatchingMutator { .. } => "NoMatchingMutator",
        WireError::Coercion { .. } => "Coercion",
        WireError::MalformedMapEntry { .. } => "MalformedMapEntry",
        other => return Err(anyhow!("unexpected error {other:?}")),
    };
    ensure!(kind == variant, "expected {variant}, got {kind}");
    Ok(())
}

#[rstest]
fn class_is_resolved_before_parameters_are_read(registry: ComponentRegistry) -> Result<()> {
    let source = single(
        "demo.Missing",
        r#"<metadata><entry key="a" value="1"/><entry key="b"/></metadata>"#,
    );
    let err = ComponentBuilder::new(&registry)
        .build_single_from_str::<dyn Fetcher>("fetcher", &source)
        .err()
        .context("class is unknown")?;
    ensure!(matches!(err, WireError::Resolution { .. }), "{err:?}");
    Ok(())
}

#[rstest]
fn numeric_text_is_not_retried_as_text(registry: ComponentRegistry) -> Result<()> {
    let err = ComponentBuilder::new(&registry)
        .build_single_from_str::<dyn Fetcher>(
            "fetcher",
            &single("demo.FileFetcher", "<backoff>fast</backoff>"),
        )
        .err()
        .context("backoff is a float")?;
    ensure!(
        err.to_string() == "bad parameter 'backoff': 'fast' is not a valid float",
        "unexpected message: {err}"
    );
    Ok(())
}

#[rstest]
fn lifecycle_runs_after_parameters(registry: ComponentRegistry) -> Result<()> {
    let fetcher = ComponentBuilder::new(&registry).build_single_from_str::<dyn Fetcher>(
        "fetcher",
        &single(
            "demo.BucketFetcher",
            "<bucket>logs</bucket><region>eu-west-1</region>",
        ),
    )?;
    let bucket = downcast::<BucketFetcher>(fetcher.as_ref())?;
    ensure!(bucket.connected);
    ensure!(fetcher.describe() == "bucket:logs@eu-west-1");
    Ok(())
}

#[rstest]
#[case::validation("<bucket>logs</bucket>", LifecycleStage::CheckInitialization, "region")]
#[case::initialization(
    "<bucket>logs</bucket><region>nowhere</region>",
    LifecycleStage::Initialize,
    "unknown region"
)]
fn lifecycle_failures_abort_the_build(
    registry: ComponentRegistry,
    #[case] params: &str,
    #[case] expected: LifecycleStage,
    #[case] fragment: &str,
) -> Result<()> {
    let err = ComponentBuilder::new(&registry)
        .build_single_from_str::<dyn Fetcher>("fetcher", &single("demo.BucketFetcher", params))
        .err()
        .context("lifecycle should fail")?;
    match &err {
        WireError::Lifecycle { stage, source, .. } => {
            ensure!(*stage == expected, "stage was {stage}");
            ensure!(source.to_string().contains(fragment), "source was {source}");
        }
        other => return Err(anyhow!("expected lifecycle error, got {other:?}")),
    }
    Ok(())
}

#[rstest]
fn rebuilding_yields_independent_instances(registry: ComponentRegistry) -> Result<()> {
    let doc = ConfigDocument::parse(FILE_FETCHER)?;
    let builder = ComponentBuilder::new(&registry);
    let first = builder.build_single::<FileFetcher>("fetcher", &doc)?;
    let mut second = builder.build_single::<FileFetcher>("fetcher", &doc)?;
    ensure!(first == second);
    second.extensions.clear();
    ensure!(first.extensions.len() == 3);
    Ok(())
}

#[rstest]
fn registry_is_shared_across_threads(registry: ComponentRegistry) -> Result<()> {
    let doc = ConfigDocument::parse(FILE_FETCHER)?;
    let descriptions = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    ComponentBuilder::new(&registry)
                        .build_single::<dyn Fetcher>("fetcher", &doc)
                        .map(|fetcher| fetcher.describe())
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| -> Result<String> {
                let built = handle
                    .join()
                    .map_err(|_| anyhow!("build thread panicked"))?;
                Ok(built?)
            })
            .collect::<Result<Vec<_>>>()
    })?;
    ensure!(descriptions.iter().all(|d| d == "file:/srv/data"));
    Ok(())
}
