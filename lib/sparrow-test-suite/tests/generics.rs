use sparrow_test_suite::*;

mod parameters {
    use super::*;

    #[test]
    fn generic_struct() {
        Test::new("struct Pair<Key: Hashable, Value> {}")
            .expect(Parses)
            .expect(Decl::new("Pair").has(Fact::GenericParameterCount(2)));
    }

    #[test]
    fn generic_function() {
        Test::new("func swap<T>(_ a: inout T, _ b: inout T) {}")
            .expect(Parses)
            .expect(
                Decl::new("swap")
                    .has(Fact::GenericParameterCount(1))
                    .has(Fact::ParameterLabels(vec!["_", "_"])),
            );
    }

    #[test]
    fn non_generic_declaration() {
        Test::new("class Plain {}")
            .expect(Parses)
            .expect(
                Decl::new("Plain")
                    .has(Fact::GenericParameterCount(0))
                    .has(Fact::GenericRequirementCount(0)),
            );
    }

    #[test]
    fn generic_count_does_not_apply_to_variables() {
        Test::new("var x = 1")
            .expect(Parses)
            .expect(Decl::new("x").not(Fact::GenericParameterCount(0)));
    }
}

mod requirements {
    use super::*;

    #[test]
    fn where_clause_on_type() {
        Test::new("struct Cache<K, V> where K: Hashable, V: Codable {}")
            .expect(Parses)
            .expect(
                Decl::new("Cache")
                    .has(Fact::GenericParameterCount(2))
                    .has(Fact::GenericRequirementCount(2)),
            );
    }

    #[test]
    fn where_clause_on_function() {
        Test::new(
            "func merge<S: Sequence>(_ s: S) -> [S.Element] where S.Element: Comparable { [] }",
        )
        .expect(Parses)
        .expect(
            Decl::new("merge")
                .has(Fact::GenericRequirementCount(1))
                .has(Fact::ReturnType("[S.Element]")),
        );
    }

    #[test]
    fn same_type_requirement_on_extension() {
        Test::new("extension Collection where Element == Int {}")
            .expect(Parses)
            .expect(Decl::new("Collection").has(Fact::GenericRequirementCount(1)));
    }
}
