mod distance_unit_deserializer;
mod geo_point_deserializer;
