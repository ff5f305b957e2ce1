diesel::table! {
    users (id) {
        id -> Text,
        email -> Text,
        name -> Text,
        phone -> Nullable<Text>,
        address -> Nullable<Text>,
        role -> Text,
        created_at -> Timestamp,
    }
}

diesel::table! {
    pets (id) {
        id -> Text,
        owner_email -> Text,
        name -> Text,
        category -> Nullable<Text>,
        image -> Nullable<Text>,
        location -> Nullable<Text>,
        short_description -> Nullable<Text>,
        long_description -> Nullable<Text>,
        adopted -> Bool,
        date_added -> Timestamp,
    }
}

diesel::table! {
    campaigns (id) {
        id -> Text,
        owner_email -> Text,
        pet_name -> Text,
        pet_image -> Nullable<Text>,
        target_amount_minor -> BigInt,
        donated_amount_minor -> BigInt,
        end_date -> Nullable<Timestamp>,
        short_description -> Nullable<Text>,
        long_description -> Nullable<Text>,
        is_paused -> Bool,
        created_at -> Timestamp,
    }
}

diesel::table! {
    payments (id) {
        id -> Text,
        campaign_id -> Text,
        donator_email -> Text,
        donator_name -> Text,
        amount_minor -> BigInt,
        created_at -> Timestamp,
    }
}

diesel::table! {
    adoption_requests (id) {
        id -> Text,
        pet_id -> Text,
        pet_name -> Text,
        requester_email -> Text,
        requester_name -> Text,
        requester_phone -> Nullable<Text>,
        requester_address -> Nullable<Text>,
        pet_owner_email -> Text,
        status -> Text,
        created_at -> Timestamp,
    }
}

diesel::joinable!(payments -> campaigns (campaign_id));
diesel::joinable!(adoption_requests -> pets (pet_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    pets,
    campaigns,
    payments,
    adoption_requests,
);
