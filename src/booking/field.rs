// Field identity for the reservation form
//
// The nine controls of the booking form, in document order. Keeping the set
// closed lets validation, focus handling, and rendering match on a field
// instead of dispatching on control-name strings.

/// The controls of the reservation form, in document order.
///
/// Discriminants follow declaration order, so `id as usize` indexes
/// [`FieldId::ALL`] and per-field storage arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Date,
    Time,
    Guests,
    Occasion,
    Name,
    Email,
    Phone,
    Dietary,
    SpecialRequests,
}

impl FieldId {
    /// All fields, top of the form first.
    pub const ALL: [FieldId; 9] = [
        FieldId::Date,
        FieldId::Time,
        FieldId::Guests,
        FieldId::Occasion,
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Dietary,
        FieldId::SpecialRequests,
    ];

    /// Control name, as it appears in submitted form data.
    pub fn name(&self) -> &'static str {
        match self {
            FieldId::Date => "date",
            FieldId::Time => "time",
            FieldId::Guests => "guests",
            FieldId::Occasion => "occasion",
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Dietary => "dietary",
            FieldId::SpecialRequests => "special-requests",
        }
    }

    /// Label shown next to the control.
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Date => "Date",
            FieldId::Time => "Time",
            FieldId::Guests => "Guests",
            FieldId::Occasion => "Occasion",
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone",
            FieldId::Dietary => "Dietary Restrictions",
            FieldId::SpecialRequests => "Special Requests",
        }
    }

    /// Whether the field must validate before a booking is accepted.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            FieldId::Date
                | FieldId::Time
                | FieldId::Guests
                | FieldId::Name
                | FieldId::Email
                | FieldId::Phone
        )
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
