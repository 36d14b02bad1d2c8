use sparrow_test_suite::*;

mod blocks {
    use super::*;

    #[test]
    fn block_is_named_by_first_condition() {
        Test::new("#if DEBUG\nlet verbose = true\n#endif")
            .expect(Parses)
            .expect(
                Decl::new("DEBUG")
                    .is(Kind::ConditionalCompilationBlock)
                    .has(Fact::Keyword("#if"))
                    .has(Fact::BranchCount(1))
                    .has(Fact::Children(vec!["verbose"])),
            );
    }

    #[test]
    fn every_branch_is_collected() {
        Test::new(
            r#"
#if os(iOS)
import UIKit
#elseif os(macOS)
import AppKit
#else
import Foundation
#endif
"#,
        )
        .expect(Parses)
        .expect(
            Decl::new("os(iOS)")
                .has(Fact::BranchCount(3))
                .has(Fact::Children(vec!["UIKit", "AppKit", "Foundation"])),
        );
    }

    #[test]
    fn branch_members_are_not_top_level() {
        Test::new("struct A {}\n#if DEBUG\nstruct B {}\n#endif")
            .expect(Parses)
            .expect(TopLevel(vec!["A", "DEBUG"]))
            .expect(Decl::new("B").is(Kind::Structure));
    }

    #[test]
    fn nested_blocks() {
        Test::new("#if A\n#if B\nfunc inner() {}\n#endif\n#endif")
            .expect(Parses)
            .expect(Decl::new("A.B.inner").is(Kind::Function));
    }

    #[test]
    fn block_inside_type() {
        Test::new("class View {\n#if canImport(UIKit)\n    func layout() {}\n#endif\n}")
            .expect(Parses)
            .expect(Decl::new("View").has(Fact::ChildCount(1)))
            .expect(Decl::new("layout").is(Kind::Function));
    }
}
