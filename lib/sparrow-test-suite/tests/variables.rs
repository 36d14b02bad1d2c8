use sparrow_test_suite::*;

mod bindings {
    use super::*;

    #[test]
    fn each_binding_is_a_declaration() {
        Test::new("var a = 1, b = 2, c = 3")
            .expect(Parses)
            .expect(TopLevel(vec!["a", "b", "c"]))
            .expect(Decl::new("b").is(Kind::Variable).has(Fact::InitialValue("2")));
    }

    #[test]
    fn bindings_share_keyword_and_modifiers() {
        Test::new("struct S { private static let x = 1, y = 2 }")
            .expect(Parses)
            .expect(
                Decl::new("S.y")
                    .has(Fact::Keyword("let"))
                    .has(Fact::Modifier("private"))
                    .has(Fact::Modifier("static")),
            );
    }

    #[test]
    fn initial_value_keeps_closures() {
        Test::new("lazy var formatter: DateFormatter = {\n    DateFormatter()\n}()")
            .expect(Parses)
            .expect(
                Decl::new("formatter")
                    .has(Fact::Modifier("lazy"))
                    .has(Fact::InitialValue("{\n    DateFormatter()\n}()")),
            );
    }
}

mod type_inference {
    use super::*;

    #[test]
    fn own_annotation() {
        Test::new("var name: String = \"\"")
            .expect(Parses)
            .expect(Decl::new("name").has(Fact::Type("String")));
    }

    #[test]
    fn unannotated_binding_borrows_from_sibling() {
        Test::new("var x, y: Double")
            .expect(Parses)
            .expect(Decl::new("x").has(Fact::Type("Double")))
            .expect(Decl::new("y").has(Fact::Type("Double")));
    }

    #[test]
    fn first_annotated_sibling_wins() {
        Test::new("var a, b: Int, c: String")
            .expect(Parses)
            .expect(Decl::new("a").has(Fact::Type("Int")))
            .expect(Decl::new("b").has(Fact::Type("Int")))
            .expect(Decl::new("c").has(Fact::Type("String")));
    }

    #[test]
    fn no_annotation_anywhere() {
        Test::new("let count = 0")
            .expect(Parses)
            .expect(Decl::new("count").has(Fact::Type("")));
    }

    #[test]
    fn optionality() {
        Test::new(
            "var delegate: Delegate?\nvar cache: Optional<Data>\nvar label: UILabel!\nvar id: Int",
        )
        .expect(Parses)
        .expect(Decl::new("delegate").has(Fact::IsOptional(true)).has(Fact::Type("Delegate?")))
        .expect(Decl::new("cache").has(Fact::IsOptional(true)).has(Fact::Type("Data?")))
        .expect(Decl::new("label").has(Fact::IsOptional(true)))
        .expect(Decl::new("id").has(Fact::IsOptional(false)));
    }

    #[test]
    fn standard_library_types_are_normalized() {
        Test::new("var a: Swift.Array<Int>\nvar b: Dictionary<String, [Int]>\nvar c: Set<String>")
            .expect(Parses)
            .expect(Decl::new("a").has(Fact::Type("[Int]")))
            .expect(Decl::new("b").has(Fact::Type("[String: [Int]]")))
            .expect(Decl::new("c").has(Fact::Type("Set<String>")));
    }

    #[test]
    fn escaping_closure() {
        Test::new("var completion: @escaping (Int) throws -> Void")
            .expect(Parses)
            .expect(Decl::new("completion").has(Fact::Type("@escaping (Int) throws -> Void")));
    }
}

mod accessors {
    use super::*;

    #[test]
    fn stored_property_has_no_accessors() {
        Test::new("var x = 1")
            .expect(Parses)
            .expect(Decl::new("x").has(Fact::AccessorCount(0)).has(Fact::IsComputed(false)));
    }

    #[test]
    fn implicit_getter() {
        Test::new("var area: Double { width * height }")
            .expect(Parses)
            .expect(
                Decl::new("area")
                    .has(Fact::IsComputed(true))
                    .has(Fact::AccessorCount(1))
                    .has(Fact::HasAccessor(Accessor::Get)),
            );
    }

    #[test]
    fn explicit_accessors() {
        Test::new("var value: Int {\n    get { storage }\n    set { storage = newValue }\n}")
            .expect(Parses)
            .expect(
                Decl::new("value")
                    .has(Fact::AccessorCount(2))
                    .has(Fact::HasAccessor(Accessor::Get))
                    .has(Fact::HasAccessor(Accessor::Set)),
            );
    }

    #[test]
    fn observers() {
        Test::new("var score = 0 {\n    willSet { }\n    didSet { }\n}")
            .expect(Parses)
            .expect(
                Decl::new("score")
                    .has(Fact::HasAccessor(Accessor::WillSet))
                    .has(Fact::HasAccessor(Accessor::DidSet))
                    .not(Fact::HasAccessor(Accessor::Get))
                    .has(Fact::IsComputed(false))
                    .has(Fact::InitialValue("0")),
            );
    }
}
