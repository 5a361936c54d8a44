mod support;

use std::sync::Arc;

use rxbind::{Assign, Record, Step, must_compile, scalar};

const LINE: &str = "Leonardo da Vinci / Florence / Italia";

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Address {
    #[capture(rx = "city")]
    city: String,
    #[capture(rx = "country")]
    country: String,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Person {
    #[capture(rx = "name")]
    name: String,
    #[capture(rx = "address")]
    address: Address,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct FlatPerson {
    #[capture(rx = "name")]
    name: String,
    #[capture(flatten)]
    address: Address,
}

#[test]
fn nested_record_uses_composite_names() {
    support::init_logging();
    let re = must_compile::<Person>(
        r"^(?P<name>.*) / (?P<address__city>.*) / (?P<address__country>.*)$",
        "rx",
    );
    let person = re.find(LINE).unwrap();
    assert_eq!(person.name, "Leonardo da Vinci");
    assert_eq!(person.address.city, "Florence");
    assert_eq!(person.address.country, "Italia");
    assert_eq!(re.find_all(LINE, Some(1)), vec![person]);
}

#[test]
fn scenario_with_short_fields() {
    let re = must_compile::<Person>(
        r"^(?P<name>.*) / (?P<address__city>.*) / (?P<address__country>.*)$",
        "rx",
    );
    assert_eq!(
        re.find("X / Y / Z"),
        Some(Person {
            name: "X".into(),
            address: Address {
                city: "Y".into(),
                country: "Z".into(),
            },
        })
    );
}

#[test]
fn flattened_record_uses_plain_names() {
    let re = must_compile::<FlatPerson>(r"^(?P<name>.*) / (?P<city>.*) / (?P<country>.*)$", "rx");
    let person = re.find(LINE).unwrap();
    assert_eq!(person.name, "Leonardo da Vinci");
    assert_eq!(person.address.city, "Florence");
    assert_eq!(person.address.country, "Italia");
    assert_eq!(re.find_all(LINE, Some(1)), vec![person]);
}

#[test]
fn nested_and_flattened_layouts_agree() {
    let nested = must_compile::<Person>(
        r"^(?P<name>.*) / (?P<address__city>.*) / (?P<address__country>.*)$",
        "rx",
    );
    let flat = must_compile::<FlatPerson>(r"^(?P<name>.*) / (?P<city>.*) / (?P<country>.*)$", "rx");

    let nested = nested.find(LINE).unwrap();
    let flat = flat.find(LINE).unwrap();
    assert_eq!(nested.name, flat.name);
    assert_eq!(nested.address, flat.address);
}

#[test]
fn deeply_nested_names_chain_the_separator() {
    #[derive(Debug, Default, Record)]
    struct Geo {
        #[capture(rx = "lat")]
        lat: String,
    }

    #[derive(Debug, Default, Record)]
    struct Place {
        #[capture(rx = "geo")]
        geo: Geo,
    }

    #[derive(Debug, Default, Record)]
    struct Visit {
        #[capture(rx = "place")]
        place: Place,
    }

    let re = must_compile::<Visit>(r"lat=(?P<place__geo__lat>[\d.]+)", "rx");
    let visit = re.find("at lat=43.77").unwrap();
    assert_eq!(visit.place.geo.lat, "43.77");
}

#[derive(Debug, Default, PartialEq, Record)]
struct Contact {
    #[capture(rx = "name")]
    name: String,
    #[capture(rx = "email")]
    email: Option<String>,
    #[capture(rx = "home")]
    home: Option<Address>,
    #[capture(flatten)]
    work: Option<Box<Address>>,
}

#[test]
fn optional_fields_are_allocated_when_bound() {
    let re = must_compile::<Contact>(
        r"^(?P<name>\w+) <(?P<email>[^>]+)> (?P<home__city>\w+)/(?P<home__country>\w+)$",
        "rx",
    );
    let contact = re.find("ada <ada@example.com> London/UK").unwrap();
    assert_eq!(contact.email.as_deref(), Some("ada@example.com"));
    assert_eq!(
        contact.home,
        Some(Address {
            city: "London".into(),
            country: "UK".into(),
        })
    );
    assert_eq!(contact.work, None);
}

#[test]
fn optional_fields_stay_empty_when_unbound() {
    let re = must_compile::<Contact>(r"^(?P<name>\w+)$", "rx");
    assert_eq!(
        re.find("ada"),
        Some(Contact {
            name: "ada".into(),
            ..Default::default()
        })
    );
}

#[test]
fn flattened_option_box_is_allocated() {
    let re = must_compile::<Contact>(r"^(?P<name>\w+) @ (?P<city>\w+)$", "rx");
    let contact = re.find("ada @ Paris").unwrap();
    let work = contact.work.unwrap();
    assert_eq!(work.city, "Paris");
    assert_eq!(work.country, "");
    assert_eq!(contact.home, None);

    let city = re.bindings().iter().find(|b| b.name == "city").unwrap();
    assert_eq!(city.path.steps(), &[Step::Field(3), Step::Allocate, Step::Field(0)]);
}

#[test]
fn tuple_structs_bind_by_position() {
    #[derive(Debug, Default, PartialEq, Record)]
    struct Version(#[capture(rx = "major")] String, #[capture(rx = "minor")] String, String);

    let re = must_compile::<Version>(r"v(?P<major>\d+)\.(?P<minor>\d+)", "rx");
    assert_eq!(
        re.find("release v1.42"),
        Some(Version("1".into(), "42".into(), String::new()))
    );
}

#[test]
fn string_like_scalars() {
    #[derive(Debug, Default, Record)]
    struct Tokens {
        #[capture(rx = "a")]
        boxed: Box<str>,
        #[capture(rx = "b")]
        shared: Arc<str>,
    }

    let re = must_compile::<Tokens>(r"(?P<a>\w+)-(?P<b>\w+)", "rx");
    let tokens = re.find("left-right").unwrap();
    assert_eq!(&*tokens.boxed, "left");
    assert_eq!(&*tokens.shared, "right");
}

#[derive(Debug, Default, PartialEq)]
struct Upper(String);

impl Assign for Upper {
    fn assign(&mut self, text: &str) {
        self.0 = text.to_uppercase();
    }
}

scalar!(Upper);

#[test]
fn custom_scalars_use_their_own_assignment() {
    #[derive(Debug, Default, Record)]
    struct Shout {
        #[capture(rx = "word")]
        word: Upper,
        #[capture(rx = "maybe")]
        maybe: Option<Upper>,
    }

    let re = must_compile::<Shout>(r"(?P<word>\w+) (?P<maybe>\w+)", "rx");
    let shout = re.find("hello world").unwrap();
    assert_eq!(shout.word, Upper("HELLO".into()));
    assert_eq!(shout.maybe, Some(Upper("WORLD".into())));
}

#[derive(Debug, Default, Record)]
struct Office {
    #[capture(rx = "city")]
    city: String,
}

#[test]
fn last_declared_field_wins_on_collision() {
    #[derive(Debug, Default, Record)]
    struct Both {
        #[capture(flatten)]
        home: Address,
        #[capture(flatten)]
        office: Office,
    }

    let re = must_compile::<Both>(r"(?P<city>\w+)", "rx");
    let both = re.find("Rome").unwrap();
    assert_eq!(both.office.city, "Rome");
    assert_eq!(both.home.city, "");

    #[derive(Debug, Default, Record)]
    struct ExplicitLast {
        #[capture(flatten)]
        office: Office,
        #[capture(rx = "city")]
        city: String,
    }

    let re = must_compile::<ExplicitLast>(r"(?P<city>\w+)", "rx");
    let record = re.find("Rome").unwrap();
    assert_eq!(record.city, "Rome");
    assert_eq!(record.office.city, "");
}

#[test]
fn tag_wins_over_flatten() {
    #[derive(Debug, Default, Record)]
    struct Tagged {
        #[capture(rx = "addr", flatten)]
        address: Address,
    }

    let re = must_compile::<Tagged>(r"(?P<city>\w+)/(?P<addr__city>\w+)", "rx");
    let record = re.find("a/b").unwrap();
    assert_eq!(record.address.city, "b");
    assert_eq!(re.bindings().len(), 1);
}

#[test]
fn generic_records() {
    #[derive(Debug, Default, Record)]
    struct Labeled<T> {
        #[capture(rx = "label")]
        label: String,
        #[capture(rx = "inner")]
        inner: T,
        #[capture(rx = "alias")]
        alias: Option<T>,
    }

    let re = must_compile::<Labeled<Address>>(r"(?P<label>\w+): (?P<inner__city>\w+)", "rx");
    let record = re.find("home: Oslo").unwrap();
    assert_eq!(record.label, "home");
    assert_eq!(record.inner.city, "Oslo");
    assert!(record.alias.is_none());

    let re = must_compile::<Labeled<String>>(r"(?P<label>\w+)=(?P<inner>\w+)(?:/(?P<alias>\w+))?", "rx");
    let record = re.find("id=42/answer").unwrap();
    assert_eq!(record.inner, "42");
    assert_eq!(record.alias.as_deref(), Some("answer"));
}
