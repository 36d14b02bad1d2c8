use sparrow_test_suite::*;

mod effectful_getter {
    use super::*;

    #[test]
    fn async_getter_has_no_setter() {
        Test::new("protocol Feed { var items: [Item] { get async } }")
            .expect(Parses)
            .expect(Decl::new("items").has(Fact::HasSetter(false)));
    }

    #[test]
    fn throwing_getter_has_no_setter() {
        Test::new("struct S { var value: Int { get throws { 1 } } }")
            .expect(Parses)
            .expect(Decl::new("value").has(Fact::HasSetter(false)));
    }
}

mod explicit_setter {
    use super::*;

    #[test]
    fn set_accessor() {
        Test::new("protocol P { var name: String { get set } }")
            .expect(Parses)
            .expect(Decl::new("name").has(Fact::HasSetter(true)).has(Fact::InProtocol(true)));
    }

    #[test]
    fn observer_counts_as_setter() {
        Test::new("var count = 0 { didSet { } }")
            .expect(Parses)
            .expect(Decl::new("count").has(Fact::HasSetter(true)));
    }

    #[test]
    fn setter_beats_restricting_modifier() {
        Test::new("struct S { private(set) var x: Int { get { 0 } set { } } }")
            .expect(Parses)
            .expect(Decl::new("x").has(Fact::HasSetter(true)));
    }
}

mod modify_accessor {
    use super::*;

    #[test]
    fn modify_is_not_a_setter() {
        Test::new("protocol Buffer { var bytes: [UInt8] { _read _modify } }")
            .expect(Parses)
            .expect(
                Decl::new("bytes")
                    .has(Fact::HasAccessor(Accessor::Modify))
                    .has(Fact::HasSetter(false)),
            );
    }

    #[test]
    fn modify_does_not_make_a_subscript_writable() {
        Test::new("struct Buffer { subscript(i: Int) -> UInt8 { _read { yield 0 } _modify { } } }")
            .expect(Parses)
            .expect(
                Decl::new("Buffer.subscript")
                    .has(Fact::HasAccessor(Accessor::Modify))
                    .has(Fact::IsWritable(false)),
            );
    }
}

mod keyword {
    use super::*;

    #[test]
    fn let_has_no_setter() {
        Test::new("let pi = 3.14")
            .expect(Parses)
            .expect(Decl::new("pi").has(Fact::HasSetter(false)));
    }

    #[test]
    fn var_has_setter() {
        Test::new("var counter = 0")
            .expect(Parses)
            .expect(Decl::new("counter").has(Fact::HasSetter(true)));
    }

    #[test]
    fn every_sibling_follows_the_keyword() {
        Test::new("let a = 1, b = 2")
            .expect(Parses)
            .expect(Decl::new("a").has(Fact::HasSetter(false)))
            .expect(Decl::new("b").has(Fact::HasSetter(false)));
    }
}

mod restricted {
    use super::*;

    #[test]
    fn private_set() {
        Test::new("class Store { private(set) var items: [String] = [] }")
            .expect(Parses)
            .expect(
                Decl::new("Store.items")
                    .has(Fact::ModifierDetail("private", "set"))
                    .has(Fact::HasSetter(false)),
            );
    }

    #[test]
    fn fileprivate_set() {
        Test::new("public fileprivate(set) var token: String?")
            .expect(Parses)
            .expect(Decl::new("token").has(Fact::HasSetter(false)));
    }
}

mod protocol_members {
    use super::*;

    #[test]
    fn get_only_requirement() {
        Test::new("protocol Named { var name: String { get } }")
            .expect(Parses)
            .expect(
                Decl::new("Named.name")
                    .has(Fact::InProtocol(true))
                    .has(Fact::HasSetter(false)),
            );
    }

    #[test]
    fn get_only_outside_protocol_has_setter() {
        Test::new("struct Named { var name: String { get } }")
            .expect(Parses)
            .expect(
                Decl::new("Named.name")
                    .has(Fact::InProtocol(false))
                    .has(Fact::HasSetter(true)),
            );
    }

    #[test]
    fn computed_property_outside_protocol_has_setter() {
        Test::new("struct Box { var area: Int { 4 } }")
            .expect(Parses)
            .expect(Decl::new("area").has(Fact::HasSetter(true)));
    }

    #[test]
    fn protocol_extension_is_not_a_protocol() {
        Test::new("extension Named { var title: String { name } }")
            .expect(Parses)
            .expect(Decl::new("title").has(Fact::InProtocol(false)));
    }

    #[test]
    fn conditional_member_of_protocol() {
        Test::new("protocol Debuggable {\n#if DEBUG\n    var dump: String { get }\n#endif\n}")
            .expect(Parses)
            .expect(
                Decl::new("Debuggable.DEBUG.dump")
                    .has(Fact::InProtocol(true))
                    .has(Fact::HasSetter(false)),
            );
    }
}
