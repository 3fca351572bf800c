//! End-to-end tests for the `fix-parents` command.

mod common;
use common::prelude::*;

/// Relative parents are rewritten, others are left alone
#[test]
fn test_fix_parents_rewrites_relative() {
    let pack = PackFixture::new()
        .with_model("item/tools/sword.json", &models::child_of("./handle"))
        .with_model("item/gem.json", &models::child_of("minecraft:item/generated"));

    pack.command()
        .arg("fix-parents")
        .arg(pack.models())
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "2 models processed, 1 parent paths fixed",
        ))
        .stderr(predicate::str::contains("✅ ruby:item/tools/sword"))
        .stderr(predicate::str::contains("👁 ruby:item/gem"));

    pack.child("assets/ruby/models/item/tools/sword.json")
        .assert(predicate::str::contains(r#""parent":"ruby:item/handle""#));
    pack.child("assets/ruby/models/item/gem.json")
        .assert(predicate::str::contains("minecraft:item/generated"));
}

/// --dry-run reports without writing
#[test]
fn test_fix_parents_dry_run() {
    let pack = PackFixture::new().with_model("item/tools/sword.json", &models::child_of("./handle"));

    pack.command()
        .arg("fix-parents")
        .arg(pack.models())
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 parent paths would be fixed"));

    pack.child("assets/ruby/models/item/tools/sword.json")
        .assert(predicate::str::contains("./handle"));
}

/// Log output can be silenced with --log-level
#[test]
fn test_fix_parents_quiet_logging() {
    let pack = PackFixture::new().with_model("item/gem.json", models::TEXTURED);

    pack.command()
        .arg("--log-level")
        .arg("error")
        .arg("fix-parents")
        .arg(pack.models())
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
