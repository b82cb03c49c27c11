use anyhow::Result;

use super::{Context, Task, TaskResult, apply_single};
use crate::resources::makefile::MakefileResource;

/// Append `lint`/`lint-fix` targets to an existing project Makefile.
///
/// Never creates a Makefile; a project without one skips this task.
#[derive(Debug)]
pub struct AugmentMakefile;

impl Task for AugmentMakefile {
    fn name(&self) -> &str {
        "Add Makefile lint targets"
    }

    fn should_run(&self, ctx: &Context) -> bool {
        ctx.fs_ops.is_file(&ctx.makefile_path())
    }

    fn run(&self, ctx: &Context) -> Result<TaskResult> {
        let resource = MakefileResource::new(ctx.makefile_path());
        apply_single(ctx, &resource, "add lint targets")
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::MockFileSystemOps;
    use crate::resources::test_helpers::MockExecutor;
    use crate::tasks::test_helpers::{make_context_with, make_fs_context};
    use std::path::Path;
    use std::sync::Arc;

    #[test]
    fn should_run_false_without_makefile() {
        let ctx = make_context_with(
            Path::new("/proj"),
            Arc::new(MockExecutor::fail()),
            Arc::new(MockFileSystemOps::new()),
        );
        assert!(!AugmentMakefile.should_run(&ctx));
    }

    #[test]
    fn should_run_true_with_makefile() {
        let fs = MockFileSystemOps::new().with_file("/proj/Makefile");
        let ctx = make_context_with(
            Path::new("/proj"),
            Arc::new(MockExecutor::fail()),
            Arc::new(fs),
        );
        assert!(AugmentMakefile.should_run(&ctx));
    }

    #[test]
    fn run_appends_targets_once() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = make_fs_context(dir.path());
        std::fs::write(ctx.makefile_path(), "all:\n\tgo build ./...\n").unwrap();

        assert!(matches!(
            AugmentMakefile.run(&ctx).unwrap(),
            TaskResult::Ok
        ));
        let after_first = std::fs::read_to_string(ctx.makefile_path()).unwrap();
        assert!(after_first.contains("\nlint:\n"));

        // Second run sees the target and changes nothing.
        assert!(matches!(
            AugmentMakefile.run(&ctx).unwrap(),
            TaskResult::Ok
        ));
        let after_second = std::fs::read_to_string(ctx.makefile_path()).unwrap();
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn dry_run_leaves_makefile_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = make_fs_context(dir.path());
        ctx.dry_run = true;
        std::fs::write(ctx.makefile_path(), "all:\n\tgo build\n").unwrap();

        assert!(matches!(
            AugmentMakefile.run(&ctx).unwrap(),
            TaskResult::DryRun
        ));
        assert_eq!(
            std::fs::read_to_string(ctx.makefile_path()).unwrap(),
            "all:\n\tgo build\n"
        );
    }
}
