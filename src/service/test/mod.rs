mod equipment;
