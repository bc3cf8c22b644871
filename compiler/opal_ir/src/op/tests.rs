use super::*;

#[test]
fn test_table_matches_declaration_order() {
    for (index, kind) in OpKind::all().enumerate() {
        assert_eq!(kind as usize, index, "{kind:?} out of order");
    }
    assert_eq!(OpKind::all().count(), 14);
}

#[test]
fn test_op_arity_comes_from_kind_row() {
    for kind in OpKind::all() {
        assert_eq!(Op::new("x", kind).arity(), kind.info().arity, "{kind:?}");
    }
}

#[test]
fn test_order_follows_binding_strength() {
    assert!(OpKind::None < OpKind::Implies);
    assert!(OpKind::Add < OpKind::Mult);
    assert!(OpKind::Or < OpKind::And);
    assert!(OpKind::Atom < OpKind::Highest);
}

#[test]
fn test_increase_and_decrease() {
    assert_eq!(OpKind::Add.increase(), OpKind::Mult);
    assert_eq!(OpKind::None.increase(), OpKind::Implies);
    assert_eq!(OpKind::Atom.increase(), OpKind::Highest);
    assert_eq!(OpKind::Highest.increase(), OpKind::Highest);

    assert_eq!(OpKind::Mult.decrease(), OpKind::Add);
    assert_eq!(OpKind::None.decrease(), OpKind::None);
}

#[test]
fn test_placement_fixes_arity() {
    for kind in OpKind::all().filter(|k| !k.is_sentinel()) {
        let expected = match kind.placement() {
            Placement::Prefix | Placement::Postfix => Arity::Fixed(1),
            Placement::Infix => Arity::Fixed(2),
            Placement::Atom => Arity::Fixed(0),
            Placement::Call => Arity::Variable,
        };
        assert_eq!(kind.arity(), expected, "{kind:?}");
    }
}

#[test]
fn test_directions() {
    assert_eq!(OpKind::Implies.direction(), Direction::Right);
    assert_eq!(OpKind::Add.direction(), Direction::Left);
    assert_eq!(OpKind::Equal.direction(), Direction::Neither);
}

#[test]
fn test_op_constructors() {
    let plus = Op::new("+", OpKind::Add);
    assert_eq!(plus.arity(), Arity::Fixed(2));
    assert_eq!(plus.placement(), Placement::Infix);
    assert_eq!(plus.to_string(), "+");

    let atom = Op::atom();
    assert!(atom.is_atom());
    assert_eq!(atom.symbol(), "");
    assert_eq!(atom.to_string(), "atom");

    let max = Op::new("max", OpKind::Call);
    assert_eq!(max.arity(), Arity::Variable);
    let pow = Op::call("pow", Arity::Fixed(2));
    assert!(pow.is_call());
    assert!(pow.placement().is_prefix_placed());
}

#[test]
fn test_arity_accepts() {
    assert!(Arity::Fixed(2).accepts(2));
    assert!(!Arity::Fixed(2).accepts(3));
    assert!(Arity::Variable.accepts(0));
    assert_eq!(Arity::Fixed(1).fixed(), Some(1));
    assert_eq!(Arity::Variable.fixed(), None);
    assert_eq!(Arity::Variable.to_string(), "variable");
}

#[test]
fn test_with_arity_keeps_symbol_and_kind() {
    let abs = Op::new("abs", OpKind::Call).with_arity(Arity::Fixed(1));
    assert_eq!(abs, Op::call("abs", Arity::Fixed(1)));
    assert_eq!(abs.kind(), OpKind::Call);
    assert_eq!(abs.symbol(), "abs");
}
