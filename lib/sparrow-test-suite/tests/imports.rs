use sparrow_test_suite::*;

mod modules {
    use super::*;

    #[test]
    fn module_import() {
        Test::new("import Foundation")
            .expect(Parses)
            .expect(
                Decl::new("Foundation")
                    .is(Kind::Import)
                    .has(Fact::Keyword("import"))
                    .not(Fact::ImportKind("struct")),
            );
    }

    #[test]
    fn several_imports_in_order() {
        Test::new("import UIKit\nimport Combine\nimport SwiftUI")
            .expect(Parses)
            .expect(TopLevel(vec!["UIKit", "Combine", "SwiftUI"]));
    }

    #[test]
    fn testable_import() {
        Test::new("@testable import App")
            .expect(Parses)
            .expect(Decl::new("App").has(Fact::Attribute("testable")));
    }
}

mod symbols {
    use super::*;

    #[test]
    fn symbol_import_is_named_by_its_path() {
        Test::new("import struct Kit.User")
            .expect(Parses)
            .expect(TopLevel(vec!["Kit.User"]))
            .expect(Decl::new("Kit.User").is(Kind::Import).has(Fact::ImportKind("struct")));
    }

    #[test]
    fn import_kind() {
        Test::new("import func Darwin.sqrt")
            .expect(Parses)
            .expect(Decl::new("Darwin.sqrt").has(Fact::ImportKind("func")));
    }
}

mod errors {
    use super::*;

    #[test]
    fn missing_module_name() {
        Test::new("import")
            .expect(HasError("expected a module name"))
            .expect(HasErrorCount(1));
    }
}
