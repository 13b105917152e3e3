use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// Owning side; stores the join column
    ManyToOne,
    /// Collection side; rows are owned by the target entity
    OneToMany,
}

/// Which parent writes propagate through the relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CascadePolicy {
    #[default]
    None,
    /// Inserts and updates propagate; removals never do
    Writes,
}

/// What happens to the owning row when the referenced row is deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OnDelete {
    #[default]
    NoAction,
    Cascade,
}

impl OnDelete {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::NoAction => "NO ACTION",
            Self::Cascade => "CASCADE",
        }
    }
}

/// Relation declared by target entity name. The target is looked up during
/// registry resolution, so declarations may reference each other in any order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationDescriptor {
    pub field: String,
    pub target: String,
    pub cardinality: Cardinality,
    pub inverse_field: Option<String>,
    pub cascade: CascadePolicy,
    pub on_delete: OnDelete,
    /// Present on the owning side only
    pub join_column: Option<String>,
    pub nullable: bool,
    /// Join column is part of the owning table's primary key
    pub primary: bool,
}

impl RelationDescriptor {
    /// Join column defaults to `<field>Id`. Non-nullable unless told otherwise.
    pub fn many_to_one(field: impl Into<String>, target: impl Into<String>) -> Self {
        let field = field.into();
        Self {
            join_column: Some(format!("{field}Id")),
            field,
            target: target.into(),
            cardinality: Cardinality::ManyToOne,
            inverse_field: None,
            cascade: CascadePolicy::None,
            on_delete: OnDelete::NoAction,
            nullable: false,
            primary: false,
        }
    }

    pub fn one_to_many(
        field: impl Into<String>,
        target: impl Into<String>,
        inverse_field: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            target: target.into(),
            cardinality: Cardinality::OneToMany,
            inverse_field: Some(inverse_field.into()),
            cascade: CascadePolicy::None,
            on_delete: OnDelete::NoAction,
            join_column: None,
            nullable: true,
            primary: false,
        }
    }

    pub fn inverse(mut self, inverse_field: impl Into<String>) -> Self {
        self.inverse_field = Some(inverse_field.into());
        self
    }

    pub fn cascade_writes(mut self) -> Self {
        self.cascade = CascadePolicy::Writes;
        self
    }

    pub fn on_delete_cascade(mut self) -> Self {
        self.on_delete = OnDelete::Cascade;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn is_owning_side(&self) -> bool {
        self.cardinality == Cardinality::ManyToOne
    }
}
